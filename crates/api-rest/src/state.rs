//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use async_trait::async_trait;
use item_version_application::{
    ApplicationResult, ProductCatalog, ServiceContext, VersionCheckService,
};
use item_version_common::AppConfig;
use item_version_domain::{LookupRequest, LookupResult};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Version check service (type-erased)
    pub version_check: Arc<dyn VersionCheckServiceTrait>,

    /// When the state was built, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create application state backed by `catalog`
    ///
    /// Catalog work for each lookup is bounded by `catalog.lookup_timeout_ms`,
    /// which validation keeps below the request timeout.
    pub fn new(config: AppConfig, catalog: Arc<dyn ProductCatalog>) -> Self {
        let service =
            VersionCheckService::new(catalog).with_lookup_timeout(config.catalog.lookup_timeout());
        Self::with_service(config, service)
    }

    /// Create application state with a custom service implementation
    pub fn with_service<S>(config: AppConfig, service: S) -> Self
    where
        S: VersionCheckServiceTrait + 'static,
    {
        Self {
            config: Arc::new(config),
            version_check: Arc::new(service),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// ============================================================================
// SERVICE TRAITS (Type-erased interfaces for route handlers)
// ============================================================================

/// Type-erased version check service trait
#[async_trait]
pub trait VersionCheckServiceTrait: Send + Sync {
    /// Run the lookup pipeline for one request
    async fn check(
        &self,
        ctx: &ServiceContext,
        request: &LookupRequest,
    ) -> ApplicationResult<LookupResult>;

    /// Whether the backing catalog can serve lookups
    async fn ready(&self) -> bool;
}

#[async_trait]
impl<C> VersionCheckServiceTrait for VersionCheckService<C>
where
    C: ProductCatalog + ?Sized + 'static,
{
    async fn check(
        &self,
        ctx: &ServiceContext,
        request: &LookupRequest,
    ) -> ApplicationResult<LookupResult> {
        VersionCheckService::check(self, ctx, request).await
    }

    async fn ready(&self) -> bool {
        self.catalog_ready().await
    }
}
