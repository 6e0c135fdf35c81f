//! Service catalog, cart and checkout logic for Repairzon.
//!
//! This crate provides the domain layer of the booking demo:
//!
//! - **Catalog**: Categories, service offerings with priced variants, reviews
//! - **Cart**: Line items keyed by (offering, variant), derived total and count
//! - **Search**: Category and title filtering over the catalog
//! - **Checkout**: Read-only checkout summary and a stub order
//!
//! # Example
//!
//! ```rust
//! use repairzon_commerce::prelude::*;
//!
//! let catalog = Catalog::demo();
//! let (offering, variant) = catalog.variant("ac-master", "1-1.5").unwrap();
//!
//! let mut cart = Cart::new();
//! let key = cart.add(offering, variant);
//! cart.add(offering, variant);
//!
//! assert_eq!(key.to_string(), "ac-master-1-1.5");
//! assert_eq!(cart.count(), 2);
//! assert_eq!(cart.total().display(), "\u{09f3}2,180");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{
        Catalog, Category, Offering, Review, Showcase, ShowcaseIds, Variant, ALL_CATEGORY,
    };

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem, LineKey, LinePricing};

    // Checkout
    pub use crate::checkout::{CheckoutSummary, Order, SummaryLine};

    // Search
    pub use crate::search::{Filter, SearchQuery};
}
