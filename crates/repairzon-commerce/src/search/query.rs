//! Search query builder.

use crate::catalog::{Catalog, Offering};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// A search over the catalog. All filters must match.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    /// Text query, as typed.
    pub query: Option<String>,
    /// Filters to apply.
    pub filters: Vec<Filter>,
}

impl SearchQuery {
    /// Create a query that matches every offering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank text adds no filter.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.trim().is_empty() {
            self.filters.push(Filter::text(q.clone()));
            self.query = Some(q);
        }
        self
    }

    /// Restrict to a category. `all` adds no filter.
    pub fn with_category(self, category: impl Into<String>) -> Self {
        let category = category.into();
        if category == crate::catalog::ALL_CATEGORY {
            self
        } else {
            self.with_filter(Filter::category(category))
        }
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Whether an offering passes every filter.
    pub fn matches(&self, offering: &Offering) -> bool {
        self.filters.iter().all(|f| f.matches(offering))
    }

    /// Run against a catalog, keeping catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Offering> {
        let results: Vec<&Offering> = catalog
            .offerings()
            .iter()
            .filter(|o| self.matches(o))
            .collect();
        tracing::debug!(
            filters = self.filters.len(),
            results = results.len(),
            "catalog search"
        );
        results
    }
}
