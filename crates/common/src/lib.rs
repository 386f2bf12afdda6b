//! Common utilities shared by the item version check crates.
//!
//! This crate provides:
//! - Configuration management
//! - Telemetry and structured logging setup
//! - Input decoding and sanitisation helpers

pub mod config;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types
pub use config::{
    AppConfig, CatalogConfig, EndpointConfig, MatchPolicy, ServerConfig, TelemetryConfig,
};
pub use telemetry::init_tracing;
pub use validation::{escape_html, query_param, strip_control_chars};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
