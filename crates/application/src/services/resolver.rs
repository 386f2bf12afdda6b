//! Lookup Resolver
//!
//! Maps a display name to a catalog product handle.

use super::{CatalogError, ProductCatalog};
use crate::validation::ItemName;
use item_version_domain::ProductId;
use std::sync::Arc;
use tracing::debug;

/// Resolves item names through the catalog's title search
pub struct LookupResolver<C: ?Sized> {
    catalog: Arc<C>,
}

impl<C> LookupResolver<C>
where
    C: ProductCatalog + ?Sized,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Find the product handle for `name`.
    ///
    /// A name that matches nothing yields `Ok(None)`; only catalog failures
    /// are errors.
    pub async fn find_by_name(&self, name: &ItemName) -> Result<Option<ProductId>, CatalogError> {
        let found = self.catalog.find_by_title(name.as_str()).await?;
        debug!(item_name = %name, product_id = ?found.map(|id| id.value()), "Resolved item name");
        Ok(found)
    }
}

impl<C: ?Sized> Clone for LookupResolver<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}
