//! The read-only catalog store.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::cart::LineKey;
use crate::catalog::review::MAX_RATING;
use crate::catalog::{Category, Offering, Review, Showcase, ShowcaseIds, Variant, ALL_CATEGORY};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Category whose default detail view prefers a specific offering.
const AC_CATEGORY: &str = "ac";
const AC_DEFAULT_OFFERING: &str = "ac-install";

/// Categories, offerings and reviews for one storefront.
///
/// Nothing mutates a catalog once it is built. Carts copy what they need
/// from it at the moment an item is added.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    /// Categories in display order, including the `all` pseudo-category.
    pub categories: Vec<Category>,
    /// Offerings in display order.
    pub offerings: Vec<Offering>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub showcase: ShowcaseIds,
}

impl Catalog {
    /// Parse an authored catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            categories = catalog.categories.len(),
            offerings = catalog.offerings.len(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Read and parse an authored catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// All categories, including `all`.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories that actually group offerings.
    pub fn browsable_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| !c.is_all())
    }

    pub fn category(&self, id: &str) -> Result<&Category, CommerceError> {
        self.categories
            .iter()
            .find(|c| c.id.as_str() == id)
            .ok_or_else(|| CommerceError::CategoryNotFound(id.to_string()))
    }

    /// All offerings in display order.
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Offerings listed under a category. `all` yields every offering.
    pub fn offerings_in(&self, category: &str) -> impl Iterator<Item = &Offering> + '_ {
        let category = category.to_string();
        self.offerings
            .iter()
            .filter(move |o| category == ALL_CATEGORY || o.category.as_str() == category)
    }

    pub fn offering(&self, id: &str) -> Result<&Offering, CommerceError> {
        self.offerings
            .iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| CommerceError::OfferingNotFound(id.to_string()))
    }

    /// Resolve an (offering, variant) pair, as the cart needs it for `add`.
    pub fn variant(
        &self,
        offering_id: &str,
        variant_id: &str,
    ) -> Result<(&Offering, &Variant), CommerceError> {
        let offering = self.offering(offering_id)?;
        let variant = offering
            .variant(variant_id)
            .ok_or_else(|| CommerceError::VariantNotFound {
                offering: offering_id.to_string(),
                variant: variant_id.to_string(),
            })?;
        Ok((offering, variant))
    }

    /// The offering opened when a whole category is selected.
    ///
    /// AC opens the installation service; every other category opens its
    /// first offering.
    pub fn default_offering_for(&self, category: &str) -> Option<&Offering> {
        if category == AC_CATEGORY {
            if let Some(install) = self
                .offerings_in(category)
                .find(|o| o.id.as_str() == AC_DEFAULT_OFFERING)
            {
                return Some(install);
            }
        }
        self.offerings_in(category).next()
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Resolve the home strips.
    pub fn showcase(&self) -> Showcase<'_> {
        let resolve = |ids: &[crate::ids::OfferingId]| {
            ids.iter()
                .filter_map(|id| self.offering(id.as_str()).ok())
                .collect::<Vec<_>>()
        };
        Showcase {
            popular: resolve(&self.showcase.popular),
            trending: resolve(&self.showcase.trending),
            recent: resolve(&self.showcase.recent),
        }
    }

    /// Check authored data for problems the cart assumes never happen.
    ///
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let mut problems = Vec::new();

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.as_str().is_empty() {
                problems.push(format!("category '{}' has an empty id", category.name));
            }
            if !category_ids.insert(category.id.as_str()) {
                problems.push(format!("duplicate category id {}", category.id));
            }
        }

        // Lines are addressed by their text form, so it must identify one pair.
        let mut cart_keys: HashMap<String, LineKey> = HashMap::new();
        let mut offering_ids = HashSet::new();
        for offering in &self.offerings {
            if offering.id.as_str().is_empty() {
                problems.push(format!("offering '{}' has an empty id", offering.title));
            }
            if !offering_ids.insert(offering.id.as_str()) {
                problems.push(format!("duplicate offering id {}", offering.id));
            }
            if !category_ids.contains(offering.category.as_str())
                || offering.category.as_str() == ALL_CATEGORY
            {
                problems.push(format!(
                    "offering {} is listed under unknown category {}",
                    offering.id, offering.category
                ));
            }
            if offering.variants.is_empty() {
                problems.push(format!("offering {} has no variants", offering.id));
            }

            let mut variant_ids = HashSet::new();
            for variant in &offering.variants {
                if variant.id.as_str().is_empty() {
                    problems.push(format!(
                        "offering {} has a variant with an empty id",
                        offering.id
                    ));
                }
                if !variant_ids.insert(variant.id.as_str()) {
                    problems.push(format!(
                        "offering {} has duplicate variant id {}",
                        offering.id, variant.id
                    ));
                }

                let key = LineKey::of(offering, variant);
                match cart_keys.get(&key.to_string()) {
                    Some(first) if *first != key => problems.push(format!(
                        "pairs {}/{} and {}/{} share cart key {}",
                        first.offering, first.variant, key.offering, key.variant, key
                    )),
                    Some(_) => {}
                    None => {
                        cart_keys.insert(key.to_string(), key);
                    }
                }
            }
        }

        for review in &self.reviews {
            if review.rating == 0 || review.rating > MAX_RATING {
                problems.push(format!(
                    "review {} has rating {} outside 1..={}",
                    review.id, review.rating, MAX_RATING
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            tracing::warn!(problems = problems.len(), "catalog failed validation");
            Err(CommerceError::InvalidCatalog(problems))
        }
    }
}
