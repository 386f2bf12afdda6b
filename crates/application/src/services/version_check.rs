//! Version Check Service
//!
//! Runs the ordered lookup pipeline. The first failing check decides the
//! outcome:
//!
//! 1. missing or blank name -> `NAME_MISSING`
//! 2. name matches no product -> `INVALID_ITEM_NAME`
//! 3. product has no version -> `NO_VERSION`
//! 4. otherwise the version is returned
//!
//! With a lookup timeout set, catalog work that overruns it fails as
//! [`CatalogError::Timeout`].

use super::{CatalogError, LookupResolver, ProductCatalog, ServiceContext};
use crate::validation::{success_message, ItemName};
use crate::ApplicationResult;
use item_version_domain::{ErrorCode, LookupRequest, LookupResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Version check service implementation
pub struct VersionCheckService<C: ?Sized> {
    resolver: LookupResolver<C>,
    catalog: Arc<C>,
    lookup_timeout: Option<Duration>,
}

impl<C> VersionCheckService<C>
where
    C: ProductCatalog + ?Sized,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            resolver: LookupResolver::new(Arc::clone(&catalog)),
            catalog,
            lookup_timeout: None,
        }
    }

    /// Bound the catalog work of each lookup by `timeout`
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Look up the published version for the requested item.
    ///
    /// Errors only when the catalog itself fails; every other outcome is a
    /// [`LookupResult`].
    #[instrument(skip(self, ctx, request), fields(correlation_id = %ctx.correlation_id))]
    pub async fn check(
        &self,
        ctx: &ServiceContext,
        request: &LookupRequest,
    ) -> ApplicationResult<LookupResult> {
        let result = match self.lookup_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.evaluate(request)).await {
                Ok(result) => result?,
                Err(_) => {
                    warn!(timeout_ms = limit.as_millis() as u64, "Catalog lookup timed out");
                    return Err(CatalogError::Timeout.into());
                }
            },
            None => self.evaluate(request).await?,
        };

        info!(
            item_name = request.item_name.as_deref().unwrap_or_default(),
            outcome = result.outcome(),
            "Version check completed"
        );

        Ok(result)
    }

    async fn evaluate(&self, request: &LookupRequest) -> ApplicationResult<LookupResult> {
        let Some(name) = ItemName::parse(request.item_name.as_deref()) else {
            return Ok(LookupResult::failure(ErrorCode::NameMissing));
        };

        let Some(product) = self.resolver.find_by_name(&name).await? else {
            return Ok(LookupResult::failure(ErrorCode::InvalidItemName));
        };

        let version = self.catalog.get_version(product).await?;
        let Some(version) = version.filter(|v| !v.trim().is_empty()) else {
            return Ok(LookupResult::failure(ErrorCode::NoVersion));
        };

        let message = success_message(&name, &version);
        Ok(LookupResult::success(version, message))
    }

    /// Check that the backing catalog can serve lookups
    pub async fn catalog_ready(&self) -> bool {
        self.catalog.health_check().await.is_ok()
    }
}
