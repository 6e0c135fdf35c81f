//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and checkout operations.
///
/// Cart mutations never fail; unknown keys are no-ops.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Offering not found.
    #[error("Offering not found: {0}")]
    OfferingNotFound(String),

    /// Variant not found within an offering.
    #[error("Variant {variant} not found in offering {offering}")]
    VariantNotFound { offering: String, variant: String },

    /// Checkout attempted with nothing in the cart.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// Authored catalog data failed validation.
    #[error("Invalid catalog: {}", .0.join("; "))]
    InvalidCatalog(Vec<String>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// I/O error while reading catalog data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_catalog_message_lists_problems() {
        let err = CommerceError::InvalidCatalog(vec![
            "offering drill has no variants".to_string(),
            "unknown category solar-x".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid catalog: offering drill has no variants; unknown category solar-x"
        );
    }

    #[test]
    fn test_variant_not_found_message() {
        let err = CommerceError::VariantNotFound {
            offering: "ac-master".to_string(),
            variant: "9-10".to_string(),
        };
        assert_eq!(err.to_string(), "Variant 9-10 not found in offering ac-master");
    }
}
