//! Application builder and endpoint activation.
//!
//! This module assembles routes, middleware and state into an Axum router.
//! The version check endpoint is mounted exactly once, by [`activate`], when
//! the router is built at startup.

use crate::{
    middleware::{handle_panic, logging_middleware, request_id_middleware},
    responses::VersionCheckResponse,
    routes::{self, health::{HealthResponse, ReadinessChecks, ReadinessResponse}},
    state::AppState,
};
use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use item_version_application::ProductCatalog;
use item_version_common::{AppConfig, CatalogConfig, EndpointConfig};
use item_version_infrastructure::{load_seed_file, InMemoryProductCatalog};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;

/// OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Version Check API",
        version = "1.0.0",
        description = "Looks up the currently published version of a product by name",
        license(name = "MIT"),
    ),
    paths(
        routes::version_check::check_version,
        routes::health::health,
        routes::health::ready,
    ),
    components(schemas(
        VersionCheckResponse,
        HealthResponse,
        ReadinessResponse,
        ReadinessChecks,
    )),
    tags(
        (name = "version", description = "Product version lookup"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router backed by `catalog`
pub fn create_app(config: AppConfig, catalog: Arc<dyn ProductCatalog>) -> Router {
    build_router(AppState::new(config, catalog))
}

/// Assemble the router around prepared state
pub fn build_router(state: AppState) -> Router {
    let config = Arc::clone(&state.config);

    let router = Router::new().merge(routes::health::routes());
    let mut app = activate(router, &config.endpoint).with_state(state);

    if config.server.enable_openapi {
        app = app.route("/api-docs/openapi.json", get(openapi_json));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(build_cors_layer())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(middleware::from_fn(logging_middleware)),
    )
}

/// Register the version check endpoint on the host router.
///
/// Runs once at startup; the returned router carries the refreshed route
/// table.
pub fn activate(router: Router<AppState>, endpoint: &EndpointConfig) -> Router<AppState> {
    let router = routes::register_endpoint(router, &endpoint.path);

    info!(path = %endpoint.path, "Version check endpoint registered, route table refreshed");

    router
}

/// Load the product catalog named by the configuration.
///
/// Fails when no seed file is configured or the file cannot be loaded; the
/// endpoint is never served without a backing catalog.
pub fn build_catalog(config: &CatalogConfig) -> anyhow::Result<Arc<InMemoryProductCatalog>> {
    let Some(path) = config.seed_file.as_deref() else {
        anyhow::bail!("No product catalog configured; set catalog.seed_file or pass --catalog");
    };

    let products = load_seed_file(path)
        .with_context(|| format!("Failed to load product catalog from {}", path.display()))?;

    info!(
        path = %path.display(),
        products = products.len(),
        match_policy = ?config.match_policy,
        "Product catalog loaded"
    );

    Ok(Arc::new(InMemoryProductCatalog::with_products(
        config.match_policy,
        products,
    )))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use item_version_common::MatchPolicy;
    use std::io::Write;

    #[test]
    fn test_build_catalog_requires_seed_file() {
        let err = build_catalog(&CatalogConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No product catalog configured"));
    }

    #[test]
    fn test_build_catalog_rejects_missing_file() {
        let config = CatalogConfig {
            seed_file: Some("/nonexistent/products.json".into()),
            match_policy: MatchPolicy::Exact,
            ..CatalogConfig::default()
        };
        assert!(build_catalog(&config).is_err());
    }

    #[test]
    fn test_build_catalog_from_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"id": 1, "title": "My Widget", "version": "2.3.1"}}]"#
        )
        .unwrap();

        let config = CatalogConfig {
            seed_file: Some(file.path().to_path_buf()),
            match_policy: MatchPolicy::CaseInsensitive,
            ..CatalogConfig::default()
        };
        let catalog = build_catalog(&config).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.policy(), MatchPolicy::CaseInsensitive);
    }

    #[test]
    fn test_build_catalog_rejects_misspelled_seed() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"prodcts": [{{"id": 1, "title": "My Widget", "version": "2.3.1"}}]}}"#
        )
        .unwrap();

        let config = CatalogConfig {
            seed_file: Some(file.path().to_path_buf()),
            ..CatalogConfig::default()
        };
        assert!(build_catalog(&config).is_err());
    }

    #[test]
    fn test_openapi_lists_endpoints() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/edd-version-check"));
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/ready"));
    }
}
