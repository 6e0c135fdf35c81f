//! Cart pricing breakdown.

use crate::cart::LineKey;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for a cart at one point in time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Total discount amount.
    pub discount_total: Money,
    /// subtotal - discounts.
    pub grand_total: Money,
    /// Per-line breakdown in cart order.
    pub line_items: Vec<LinePricing>,
}

impl CartPricing {
    /// Check if any discounts are applied.
    pub fn has_discounts(&self) -> bool {
        !self.discount_total.is_zero()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LinePricing {
    pub key: LineKey,
    pub unit_price: Money,
    pub qty: u32,
    /// unit_price × qty.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_discounts() {
        let mut pricing = CartPricing {
            subtotal: Money::new(1000),
            discount_total: Money::zero(),
            grand_total: Money::new(1000),
            line_items: vec![],
        };
        assert!(!pricing.has_discounts());

        pricing.discount_total = Money::new(100);
        assert!(pricing.has_discounts());
    }
}
