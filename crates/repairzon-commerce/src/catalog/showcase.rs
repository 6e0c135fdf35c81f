//! Featured offering strips for the home view.

use crate::catalog::Offering;
use crate::ids::OfferingId;
use serde::{Deserialize, Serialize};

/// Authored offering ids for each home strip.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowcaseIds {
    #[serde(default)]
    pub popular: Vec<OfferingId>,
    #[serde(default)]
    pub trending: Vec<OfferingId>,
    #[serde(default)]
    pub recent: Vec<OfferingId>,
}

/// Home strips resolved against a catalog.
///
/// Ids that do not resolve are dropped, so a strip may be shorter than
/// authored or empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Showcase<'a> {
    pub popular: Vec<&'a Offering>,
    pub trending: Vec<&'a Offering>,
    pub recent: Vec<&'a Offering>,
}

impl<'a> Showcase<'a> {
    /// Strips in display order with their headings, skipping empty ones.
    pub fn strips(&self) -> Vec<(&'static str, &[&'a Offering])> {
        [
            ("Popular Services", self.popular.as_slice()),
            ("Trending", self.trending.as_slice()),
            ("Recent Services", self.recent.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }
}
