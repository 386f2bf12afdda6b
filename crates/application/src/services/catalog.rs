//! Product catalog port.
//!
//! The catalog of sellable products lives outside this service. Anything that
//! can search products by title and read their version metadata can back the
//! version check by implementing [`ProductCatalog`].

use async_trait::async_trait;
use item_version_domain::ProductId;
use thiserror::Error;

/// Failures of the catalog itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog could not be reached
    #[error("catalog unreachable: {0}")]
    Unavailable(String),

    /// The catalog did not answer in time
    #[error("catalog request timed out")]
    Timeout,

    /// The catalog returned data that could not be understood
    #[error("catalog returned corrupt data: {0}")]
    Corrupt(String),
}

impl CatalogError {
    /// Whether retrying later may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout)
    }
}

/// Read-only access to the external product catalog
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Find the product whose title matches `title`.
    ///
    /// Returns `Ok(None)` when nothing matches. The comparison rules
    /// (case, whitespace) are the catalog's own.
    async fn find_by_title(&self, title: &str) -> Result<Option<ProductId>, CatalogError>;

    /// Read the version metadata of a product, `None` if unset
    async fn get_version(&self, product: ProductId) -> Result<Option<String>, CatalogError>;

    /// Check that the catalog can serve lookups
    async fn health_check(&self) -> Result<(), CatalogError> {
        Ok(())
    }
}
