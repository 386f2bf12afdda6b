//! Mock catalog implementations.

use async_trait::async_trait;
use item_version_application::{CatalogError, ProductCatalog};
use item_version_domain::{Product, ProductId};
use parking_lot::RwLock;
use std::sync::Arc;

/// Catalog call recorded by [`MockProductCatalog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogCall {
    FindByTitle(String),
    GetVersion(ProductId),
    HealthCheck,
}

/// Exact-match catalog that records every call and can be switched offline
pub struct MockProductCatalog {
    products: Arc<RwLock<Vec<Product>>>,
    calls: Arc<RwLock<Vec<CatalogCall>>>,
    failure: Arc<RwLock<Option<CatalogError>>>,
}

impl MockProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(Vec::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    pub fn with_product(self, product: Product) -> Self {
        self.products.write().push(product);
        self
    }

    /// Make every subsequent call fail with `error`
    pub fn fail_with(&self, error: CatalogError) {
        *self.failure.write() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.write() = None;
    }

    pub fn calls(&self) -> Vec<CatalogCall> {
        self.calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().len()
    }

    fn record(&self, call: CatalogCall) -> Result<(), CatalogError> {
        self.calls.write().push(call);
        match self.failure.read().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for MockProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for MockProductCatalog {
    async fn find_by_title(&self, title: &str) -> Result<Option<ProductId>, CatalogError> {
        self.record(CatalogCall::FindByTitle(title.to_string()))?;
        Ok(self
            .products
            .read()
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.id))
    }

    async fn get_version(&self, product: ProductId) -> Result<Option<String>, CatalogError> {
        self.record(CatalogCall::GetVersion(product))?;
        Ok(self
            .products
            .read()
            .iter()
            .find(|p| p.id == product)
            .and_then(|p| p.version.clone()))
    }

    async fn health_check(&self) -> Result<(), CatalogError> {
        self.record(CatalogCall::HealthCheck)
    }
}
