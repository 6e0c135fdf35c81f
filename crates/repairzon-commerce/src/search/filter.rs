//! Search filter types.

use crate::catalog::{Offering, ALL_CATEGORY};
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A filter over catalog offerings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Offerings in one category. `all` matches everything.
    Category(CategoryId),
    /// Case-insensitive substring of the title.
    Text(String),
    /// Offerings with at least one variant priced at or below this.
    MaxPrice(Money),
    /// Offerings with at least one discounted variant.
    OnSale,
}

impl Filter {
    /// Create a category filter.
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Filter::Category(id.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Whether an offering passes this filter.
    pub fn matches(&self, offering: &Offering) -> bool {
        match self {
            Filter::Category(id) => id.as_str() == ALL_CATEGORY || offering.category == *id,
            Filter::Text(query) => offering.title_contains(query),
            Filter::MaxPrice(max) => offering.variants.iter().any(|v| v.price <= *max),
            Filter::OnSale => offering.variants.iter().any(|v| v.discount().is_some()),
        }
    }
}
