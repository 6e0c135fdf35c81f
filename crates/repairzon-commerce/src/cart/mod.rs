//! Shopping cart module.
//!
//! Contains the cart, its line items and keys, and pricing.

#[allow(clippy::module_inception)]
mod cart;
mod key;
mod pricing;

pub use cart::{Cart, LineItem};
pub use key::LineKey;
pub use pricing::{CartPricing, LinePricing};
