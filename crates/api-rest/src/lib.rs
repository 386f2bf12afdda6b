//! Item Version Check REST API
//!
//! Axum service answering a single lookup endpoint: given `item_name`, it
//! returns the product's published version or a structured failure, always
//! as HTTP 200 with a flat JSON body.
//!
//! ## Architecture
//!
//! - **app**: Router assembly and endpoint activation
//! - **routes**: Version check and health handlers
//! - **middleware**: Request IDs, request logging, panic handling
//! - **responses**: Response shaping
//! - **error**: HTTP error conversion
//! - **state**: Shared application state
//!
//! ## Usage
//!
//! ```rust,no_run
//! use item_version_api_rest::app::create_app;
//! use item_version_common::{AppConfig, MatchPolicy};
//! use item_version_infrastructure::InMemoryProductCatalog;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::load().expect("Failed to load config");
//!     let catalog = Arc::new(InMemoryProductCatalog::new(MatchPolicy::Exact));
//!     let app = create_app(config, catalog);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
//!         .await
//!         .expect("Failed to bind");
//!
//!     axum::serve(listener, app).await.expect("Server error");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{activate, create_app};
pub use error::{ApiError, ApiResult};
pub use responses::VersionCheckResponse;
pub use state::AppState;
