//! Fluent builders for constructing test data.

use item_version_domain::{Product, ProductId};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1000);

/// Builder for creating Product test instances
#[derive(Clone)]
pub struct ProductBuilder {
    id: ProductId,
    title: String,
    version: Option<String>,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self {
            id: ProductId::new(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            title: "Test Product".to_string(),
            version: Some("1.0.0".to_string()),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = ProductId::new(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn without_version(mut self) -> Self {
        self.version = None;
        self
    }

    /// Build the product; bypasses title validation so tests can model bad catalog rows
    pub fn build(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            version: self.version,
        }
    }
}

impl Default for ProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `name` the way a client would put it in a query string
pub fn encode_item_name(name: &str) -> String {
    url::form_urlencoded::byte_serialize(name.as_bytes()).collect()
}
