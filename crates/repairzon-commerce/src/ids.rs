//! Newtype IDs for type-safe identifiers.
//!
//! Offering and variant ids are both plain strings in authored catalog data;
//! the newtypes keep them from being swapped when building cart keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(CategoryId);
define_id!(OfferingId);
define_id!(VariantId);
define_id!(OrderId);

impl OrderId {
    /// Generate a new unique order ID.
    pub fn generate() -> Self {
        Self(format!("RZ-{}", generate_id()))
    }
}

/// Generate a unique ID using timestamp and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(nanos_u64)
        .unwrap_or(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}{:04x}", timestamp, counter & 0xffff)
}

/// Nanoseconds in a duration, saturating at `u64::MAX` (about 584 years).
fn nanos_u64(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = OfferingId::new("ac-master");
        assert_eq!(id.as_str(), "ac-master");
    }

    #[test]
    fn test_order_id_generation() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("RZ-"));
    }

    #[test]
    fn test_id_from_str() {
        let id: VariantId = "1-1.5".into();
        assert_eq!(id.as_str(), "1-1.5");
        assert_eq!(format!("{}", id), "1-1.5");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("cleaning");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cleaning\"");
        let back: CategoryId = serde_json::from_str("\"cleaning\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_nanos_saturate_instead_of_wrapping() {
        use std::time::Duration;
        assert_eq!(nanos_u64(Duration::from_nanos(1_500)), 1_500);
        assert_eq!(nanos_u64(Duration::from_secs(u64::MAX)), u64::MAX);
    }
}
