//! Order types.

use crate::checkout::CheckoutSummary;
use crate::ids::OrderId;
use serde::Serialize;

/// A placed order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// What was ordered, as shown at checkout.
    pub summary: CheckoutSummary,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

impl Order {
    pub(crate) fn new(summary: CheckoutSummary) -> Self {
        Self {
            id: OrderId::generate(),
            summary,
            placed_at: current_timestamp(),
        }
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
