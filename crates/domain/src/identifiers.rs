//! Strongly-typed identifier types for catalog entities.
//!
//! Catalog products are addressed by an opaque numeric handle. Wrapping it in a
//! newtype keeps product handles from being mixed up with other integers.

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from a raw handle
            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Get the underlying handle
            #[inline]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| DomainError::InvalidIdentifier(s.to_string()))
            }
        }
    };
}

define_id!(ProductId, "Opaque handle of a product in the external catalog");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = ProductId::new(1234);
        assert_eq!(id.to_string(), "1234");
    }

    #[test]
    fn test_id_parsing() {
        let id: ProductId = " 77 ".parse().unwrap();
        assert_eq!(id, ProductId::new(77));

        let err = "abc".parse::<ProductId>().unwrap_err();
        assert_eq!(err, DomainError::InvalidIdentifier("abc".to_string()));
    }

    #[test]
    fn test_id_serialization() {
        let id = ProductId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
