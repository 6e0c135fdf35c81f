//! Search module.
//!
//! Category and text filtering over the catalog.

mod filter;
mod query;

pub use filter::Filter;
pub use query::SearchQuery;
