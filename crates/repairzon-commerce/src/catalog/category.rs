//! Service categories.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Id of the pseudo-category that means "no category filter".
pub const ALL_CATEGORY: &str = "all";

/// A category of bookable services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Icon glyph shown on category tiles.
    #[serde(default)]
    pub icon: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Whether this is the `all` pseudo-category.
    pub fn is_all(&self) -> bool {
        self.id.as_str() == ALL_CATEGORY
    }
}
