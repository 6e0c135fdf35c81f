//! Service offerings and their priced variants.

use crate::ids::{CategoryId, OfferingId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A bookable service in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offering {
    /// Unique offering identifier.
    pub id: OfferingId,
    /// Category this offering is listed under.
    pub category: CategoryId,
    /// Display title.
    pub title: String,
    /// Priced options. Authored data must have at least one.
    pub variants: Vec<Variant>,
    /// Cover image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Promotional badge (e.g., "৳500 Off").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// What the service covers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<String>,
    /// What the service does not cover.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<String>,
}

impl Offering {
    /// Create an offering with no descriptive text.
    pub fn new(
        id: impl Into<OfferingId>,
        category: impl Into<CategoryId>,
        title: impl Into<String>,
        variants: Vec<Variant>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            title: title.into(),
            variants,
            image_url: None,
            badge: None,
            details: None,
            included: Vec::new(),
            excluded: Vec::new(),
        }
    }

    /// Look up a variant by id.
    pub fn variant(&self, variant_id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id.as_str() == variant_id)
    }

    /// The cheapest variant price, used for "from" labels.
    pub fn starting_price(&self) -> Option<Money> {
        self.variants.iter().map(|v| v.price).min()
    }

    /// Case-insensitive title match.
    pub fn title_contains(&self, text: &str) -> bool {
        self.title.to_lowercase().contains(&text.to_lowercase())
    }
}

/// A priced option of an offering (e.g., a tonnage tier).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variant {
    /// Identifier, unique within its offering.
    pub id: VariantId,
    /// Display label (e.g., "1–1.5 Ton").
    pub label: String,
    /// Current price.
    pub price: Money,
    /// Previous price, shown struck through.
    #[serde(default, alias = "old", skip_serializing_if = "Option::is_none")]
    pub old_price: Option<Money>,
}

impl Variant {
    pub fn new(id: impl Into<VariantId>, label: impl Into<String>, price: u64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            price: Money::new(price),
            old_price: None,
        }
    }

    /// Set the struck-through previous price.
    pub fn with_old_price(mut self, old_price: u64) -> Self {
        self.old_price = Some(Money::new(old_price));
        self
    }

    /// Amount saved against the old price, if it is higher than the current one.
    pub fn discount(&self) -> Option<Money> {
        self.old_price
            .and_then(|old| old.checked_sub(self.price))
            .filter(|saved| !saved.is_zero())
    }

    /// Discount as a whole percentage of the old price.
    pub fn discount_percentage(&self) -> Option<u64> {
        let old = self.old_price?;
        let saved = self.discount()?;
        Some(saved.amount() * 100 / old.amount())
    }
}
