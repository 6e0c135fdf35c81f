//! Service catalog module.
//!
//! Contains categories, offerings with priced variants, reviews, the home
//! showcase, and the read-only store that holds them.

mod category;
mod demo;
mod offering;
mod review;
mod showcase;
mod store;

pub use category::{Category, ALL_CATEGORY};
pub use offering::{Offering, Variant};
pub use review::{Review, MAX_RATING};
pub use showcase::{Showcase, ShowcaseIds};
pub use store::Catalog;
