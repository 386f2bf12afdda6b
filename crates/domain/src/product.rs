//! Read-only view of a product held by the external catalog.

use crate::errors::DomainError;
use crate::identifiers::ProductId;
use serde::{Deserialize, Serialize};

/// A sellable product as seen by the version lookup.
///
/// The catalog owns these records; this service never creates, mutates or
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog handle
    pub id: ProductId,

    /// Display name, used as the lookup key
    pub title: String,

    /// Currently published version, absent until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Product {
    /// Create a product record, rejecting blank titles
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        version: Option<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::EmptyTitle(id.value()));
        }

        Ok(Self { id, title, version })
    }

    /// The published version, if one is set and not blank
    pub fn published_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_rejected() {
        let err = Product::new(ProductId::new(5), "   ", None).unwrap_err();
        assert_eq!(err, DomainError::EmptyTitle(5));
    }

    #[test]
    fn test_published_version() {
        let product = Product::new(ProductId::new(1), "My Widget", Some("2.3.1".into())).unwrap();
        assert_eq!(product.published_version(), Some("2.3.1"));

        let unset = Product::new(ProductId::new(2), "My Widget", None).unwrap();
        assert_eq!(unset.published_version(), None);

        let blank = Product::new(ProductId::new(3), "My Widget", Some(" ".into())).unwrap();
        assert_eq!(blank.published_version(), None);
    }

    #[test]
    fn test_deserialize_without_version() {
        let product: Product =
            serde_json::from_str(r#"{"id": 10, "title": "Ghost Plugin"}"#).unwrap();
        assert_eq!(product.id, ProductId::new(10));
        assert!(product.version.is_none());
    }
}
