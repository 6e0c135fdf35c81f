//! Cart and line item types.

use crate::cart::{CartPricing, LineKey, LinePricing};
use crate::catalog::{Offering, Variant};
use crate::money::Money;
use serde::Serialize;

/// A shopping cart for one session.
///
/// Lines keep the order they were first added in and each key appears at
/// most once. Every operation is total: keys that are not in the cart turn
/// mutations into no-ops, and totals are computed from the lines on every
/// read.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog variant.
    ///
    /// A pair already in the cart gets its quantity bumped; its title,
    /// label and price stay as they were when it was first added. A new
    /// pair is appended with quantity 1 and the variant's current price.
    pub fn add(&mut self, offering: &Offering, variant: &Variant) -> LineKey {
        let key = LineKey::of(offering, variant);

        if let Some(existing) = self.line_mut(&key) {
            existing.qty = existing.qty.saturating_add(1);
            tracing::debug!(key = %key, qty = existing.qty, "merged into existing cart line");
            return key;
        }

        self.items.push(LineItem {
            key: key.clone(),
            title: offering.title.clone(),
            variant_label: variant.label.clone(),
            price: variant.price,
            qty: 1,
        });
        tracing::debug!(key = %key, price = variant.price.amount(), "added cart line");
        key
    }

    /// Increase a line's quantity by one.
    pub fn inc(&mut self, key: &LineKey) {
        match self.line_mut(key) {
            Some(item) => {
                item.qty = item.qty.saturating_add(1);
                tracing::debug!(key = %key, qty = item.qty, "incremented cart line");
            }
            None => tracing::trace!(key = %key, "inc on key not in cart"),
        }
    }

    /// Decrease a line's quantity by one, removing the line instead of
    /// letting it reach zero.
    pub fn dec(&mut self, key: &LineKey) {
        let Some(pos) = self.position(key) else {
            tracing::trace!(key = %key, "dec on key not in cart");
            return;
        };

        if self.items[pos].qty > 1 {
            self.items[pos].qty -= 1;
            tracing::debug!(key = %key, qty = self.items[pos].qty, "decremented cart line");
        } else {
            self.items.remove(pos);
            tracing::debug!(key = %key, "removed cart line at quantity one");
        }
    }

    /// Remove a line regardless of its quantity.
    pub fn remove(&mut self, key: &LineKey) {
        match self.position(key) {
            Some(pos) => {
                self.items.remove(pos);
                tracing::debug!(key = %key, "removed cart line");
            }
            None => tracing::trace!(key = %key, "remove on key not in cart"),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines; the cart badge counter.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, key: &LineKey) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.key == key)
    }

    /// Resolve the text form of a key (e.g. `ac-master-1-1.5`) to a line.
    pub fn find_key(&self, text: &str) -> Option<LineKey> {
        self.items
            .iter()
            .find(|i| i.key.to_string() == text)
            .map(|i| i.key.clone())
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Per-line and cart-level pricing breakdown.
    pub fn pricing(&self) -> CartPricing {
        let line_items: Vec<LinePricing> = self
            .items
            .iter()
            .map(|item| LinePricing {
                key: item.key.clone(),
                unit_price: item.price,
                qty: item.qty,
                total: item.line_total(),
            })
            .collect();

        let subtotal = self.total();
        let discount_total = Money::zero();

        CartPricing {
            subtotal,
            discount_total,
            grand_total: subtotal - discount_total,
            line_items,
        }
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.items.iter().position(|i| &i.key == key)
    }

    fn line_mut(&mut self, key: &LineKey) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| &i.key == key)
    }
}

/// A line in the cart.
///
/// Title, label and price are copies taken when the pair was first added.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    pub key: LineKey,
    /// Offering title.
    pub title: String,
    /// Variant label (e.g., "2–3 Ton").
    pub variant_label: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, always at least 1.
    pub qty: u32,
}

impl LineItem {
    /// price × qty.
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.qty)
    }
}
