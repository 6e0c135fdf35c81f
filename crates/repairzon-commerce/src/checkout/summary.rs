//! Checkout summary: a one-time read of the cart.

use crate::cart::{Cart, LineKey};
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::money::Money;
use serde::Serialize;

/// What the checkout page shows.
///
/// Built from a cart once; later cart changes do not affect it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CheckoutSummary {
    pub lines: Vec<SummaryLine>,
    /// Number of units across all lines.
    pub item_count: u64,
    pub subtotal: Money,
    /// Always zero until promo codes exist.
    pub discount: Money,
    /// subtotal - discount.
    pub total: Money,
}

/// One row of the checkout summary.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummaryLine {
    pub key: LineKey,
    pub title: String,
    pub variant_label: String,
    pub price: Money,
    pub qty: u32,
    pub line_total: Money,
}

impl CheckoutSummary {
    /// Snapshot a cart.
    pub fn from_cart(cart: &Cart) -> Self {
        let pricing = cart.pricing();
        let lines = cart
            .items()
            .iter()
            .map(|item| SummaryLine {
                key: item.key.clone(),
                title: item.title.clone(),
                variant_label: item.variant_label.clone(),
                price: item.price,
                qty: item.qty,
                line_total: item.line_total(),
            })
            .collect();

        Self {
            lines,
            item_count: cart.count(),
            subtotal: pricing.subtotal,
            discount: pricing.discount_total,
            total: pricing.grand_total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Place the order. Nothing is charged or sent anywhere.
    pub fn place_order(self) -> Result<Order, CommerceError> {
        if self.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let order = Order::new(self);
        tracing::info!(
            order_id = %order.id,
            total = order.summary.total.amount(),
            items = order.summary.item_count,
            "order placed"
        );
        Ok(order)
    }
}
