//! In-memory product catalog.

use async_trait::async_trait;
use item_version_application::{CatalogError, ProductCatalog};
use item_version_common::MatchPolicy;
use item_version_domain::{Product, ProductId};
use parking_lot::RwLock;

/// Catalog held in process memory.
///
/// Products keep their insertion order; when several share a title the
/// earliest one wins.
#[derive(Debug)]
pub struct InMemoryProductCatalog {
    policy: MatchPolicy,
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductCatalog {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            policy,
            products: RwLock::new(Vec::new()),
        }
    }

    pub fn with_products(policy: MatchPolicy, products: Vec<Product>) -> Self {
        Self {
            policy,
            products: RwLock::new(products),
        }
    }

    /// Add or replace a product, keyed by its ID
    pub fn upsert(&self, product: Product) {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
    }

    /// Swap the whole catalog contents
    pub fn replace_all(&self, products: Vec<Product>) {
        *self.products.write() = products;
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    fn matches(&self, candidate: &str, wanted: &str) -> bool {
        match self.policy {
            MatchPolicy::Exact => candidate == wanted,
            MatchPolicy::CaseInsensitive => candidate.to_lowercase() == wanted.to_lowercase(),
        }
    }
}

impl Default for InMemoryProductCatalog {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}

#[async_trait]
impl ProductCatalog for InMemoryProductCatalog {
    async fn find_by_title(&self, title: &str) -> Result<Option<ProductId>, CatalogError> {
        Ok(self
            .products
            .read()
            .iter()
            .find(|p| self.matches(&p.title, title))
            .map(|p| p.id))
    }

    async fn get_version(&self, product: ProductId) -> Result<Option<String>, CatalogError> {
        Ok(self
            .products
            .read()
            .iter()
            .find(|p| p.id == product)
            .and_then(|p| p.version.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, version: Option<&str>) -> Product {
        Product::new(ProductId::new(id), title, version.map(str::to_string)).unwrap()
    }

    #[tokio::test]
    async fn test_exact_match() {
        let catalog = InMemoryProductCatalog::with_products(
            MatchPolicy::Exact,
            vec![product(1, "My Widget", Some("2.3.1"))],
        );

        assert_eq!(
            catalog.find_by_title("My Widget").await.unwrap(),
            Some(ProductId::new(1))
        );
        assert_eq!(catalog.find_by_title("my widget").await.unwrap(), None);
        assert_eq!(catalog.find_by_title("My Widget ").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_case_insensitive_match() {
        let catalog = InMemoryProductCatalog::with_products(
            MatchPolicy::CaseInsensitive,
            vec![product(1, "Café Widget", Some("1.0"))],
        );

        assert_eq!(
            catalog.find_by_title("CAFÉ WIDGET").await.unwrap(),
            Some(ProductId::new(1))
        );
    }

    #[tokio::test]
    async fn test_first_registered_title_wins() {
        let catalog = InMemoryProductCatalog::with_products(
            MatchPolicy::Exact,
            vec![
                product(7, "Twin", Some("1.0")),
                product(3, "Twin", Some("2.0")),
            ],
        );

        let id = catalog.find_by_title("Twin").await.unwrap().unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(catalog.get_version(id).await.unwrap().as_deref(), Some("1.0"));
    }

    #[tokio::test]
    async fn test_get_version_unknown_or_unset() {
        let catalog = InMemoryProductCatalog::default();
        catalog.upsert(product(2, "Bare", None));

        assert_eq!(catalog.get_version(ProductId::new(2)).await.unwrap(), None);
        assert_eq!(catalog.get_version(ProductId::new(99)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_and_replace() {
        let catalog = InMemoryProductCatalog::default();
        catalog.upsert(product(1, "My Widget", None));
        catalog.upsert(product(1, "My Widget", Some("3.0")));
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get_version(ProductId::new(1)).await.unwrap().as_deref(),
            Some("3.0")
        );

        catalog.replace_all(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.health_check().await.is_ok());
    }
}
