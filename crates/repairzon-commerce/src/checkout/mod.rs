//! Checkout module.
//!
//! Contains the checkout summary and the stub order it produces.

mod order;
mod summary;

pub use order::Order;
pub use summary::{CheckoutSummary, SummaryLine};
