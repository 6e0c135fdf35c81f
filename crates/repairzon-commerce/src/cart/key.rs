//! Composite line-item identity.

use crate::catalog::{Offering, Variant};
use crate::ids::{OfferingId, VariantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: one (offering, variant) pair.
///
/// Equality is structural, so ids that themselves contain `-` can never
/// collide. The `Display` form joins the two ids with `-`
/// (`ac-master-1-1.5`) and is only used for addressing lines from text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub offering: OfferingId,
    pub variant: VariantId,
}

impl LineKey {
    pub fn new(offering: impl Into<OfferingId>, variant: impl Into<VariantId>) -> Self {
        Self {
            offering: offering.into(),
            variant: variant.into(),
        }
    }

    /// Key for a catalog pair.
    pub fn of(offering: &Offering, variant: &Variant) -> Self {
        Self {
            offering: offering.id.clone(),
            variant: variant.id.clone(),
        }
    }
}

impl fmt::Display for LineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.offering, self.variant)
    }
}
