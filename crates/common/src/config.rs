//! Configuration management for the service.
//!
//! Settings are layered (later sources override earlier ones):
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (if it exists)
//! 3. `config/{APP_ENV}.toml` (if it exists)
//! 4. An explicit file passed on the command line (if any)
//! 5. Environment variables prefixed with `APP_`, e.g. `APP_SERVER__PORT=3000`
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [endpoint]
//! path = "/edd-version-check"
//!
//! [catalog]
//! seed_file = "catalog/products.json"
//! match_policy = "case_insensitive"
//! lookup_timeout_ms = 5000
//!
//! [telemetry]
//! json_logging = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Routes served next to the version check endpoint
pub const RESERVED_PATHS: [&str; 3] = ["/health", "/ready", "/api-docs/openapi.json"];

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Serve the OpenAPI document
    #[serde(default = "default_enable_openapi")]
    pub enable_openapi: bool,
}

/// Version check endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Route the handler answers on
    #[serde(default = "default_endpoint_path")]
    pub path: String,
}

/// How catalog titles are compared with the requested name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Byte-for-byte title comparison
    #[default]
    Exact,
    /// Unicode case-insensitive comparison
    CaseInsensitive,
}

/// Catalog configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML file listing the products to serve
    #[serde(default)]
    pub seed_file: Option<PathBuf>,

    /// Title comparison policy
    #[serde(default)]
    pub match_policy: MatchPolicy,

    /// Upper bound on the catalog work for one lookup, in milliseconds
    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name reported in logs
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_enable_openapi() -> bool {
    true
}

fn default_endpoint_path() -> String {
    "/edd-version-check".to_string()
}

fn default_lookup_timeout_ms() -> u64 {
    10_000
}

fn default_service_name() -> String {
    "item-version-check".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            enable_openapi: default_enable_openapi(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            path: default_endpoint_path(),
        }
    }
}

impl EndpointConfig {
    /// The configured path without trailing slashes
    pub fn mount_path(&self) -> &str {
        self.path.trim_end_matches('/')
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_file: None,
            match_policy: MatchPolicy::default(),
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

impl CatalogConfig {
    /// Get the lookup timeout as a Duration
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default files and the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use item_version_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Serving {} on port {}", config.endpoint.path, config.server.port);
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_with(None)
    }

    /// Load configuration, layering `extra_file` above the default files.
    pub fn load_with(extra_file: Option<&Path>) -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        let path = &self.endpoint.path;
        let mount = self.endpoint.mount_path();
        if !path.starts_with('/') || mount.len() < 2 {
            anyhow::bail!("Endpoint path '{}' must start with '/' and name a segment", path);
        }

        if path.contains(['?', '#', '{', '}', '*', ':']) {
            anyhow::bail!("Endpoint path '{}' contains reserved characters", path);
        }

        if RESERVED_PATHS.contains(&mount) {
            anyhow::bail!("Endpoint path '{}' collides with a built-in route", path);
        }

        if self.catalog.lookup_timeout_ms == 0 {
            anyhow::bail!("Catalog lookup timeout must be greater than 0");
        }

        if self.catalog.lookup_timeout() >= self.request_timeout() {
            anyhow::bail!(
                "Catalog lookup timeout ({} ms) must be shorter than the request timeout ({} s)",
                self.catalog.lookup_timeout_ms,
                self.server.request_timeout_seconds
            );
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint.path, "/edd-version-check");
        assert_eq!(config.catalog.match_policy, MatchPolicy::Exact);
        assert_eq!(config.server_address(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.catalog.lookup_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.server.port = 0;
        assert!(config.validate().is_err());
        config.server.port = 8080;

        config.endpoint.path = "edd-version-check".to_string();
        assert!(config.validate().is_err());

        config.endpoint.path = "/".to_string();
        assert!(config.validate().is_err());

        config.endpoint.path = "/check?x=1".to_string();
        assert!(config.validate().is_err());
        config.endpoint.path = "/version-check".to_string();

        config.catalog.lookup_timeout_ms = 0;
        assert!(config.validate().is_err());
        config.catalog.lookup_timeout_ms = 30_000;
        assert!(config.validate().is_err());
        config.catalog.lookup_timeout_ms = 29_999;
        assert!(config.validate().is_ok());

        config.telemetry.log_level = "verbose".to_string();
        assert!(config.validate().is_err());

        config.telemetry.log_level = "debug".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_endpoint_path_checked_after_trimming() {
        let mut config = AppConfig::default();

        for path in ["//", "///", "/:name", "/health", "/ready/", "/api-docs/openapi.json"] {
            config.endpoint.path = path.to_string();
            assert!(config.validate().is_err(), "path: {}", path);
        }

        config.endpoint.path = "/edd-version-check/".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoint.mount_path(), "/edd-version-check");

        config.endpoint.path = "/healthcheck".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml_like(
            r#"
            [catalog]
            match_policy = "case_insensitive"
            "#,
        );

        assert_eq!(config.catalog.match_policy, MatchPolicy::CaseInsensitive);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.telemetry, TelemetryConfig::default());
    }

    #[test]
    fn test_load_with_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9191\n\n[endpoint]\npath = \"/version\"\n"
        )
        .unwrap();

        let config = AppConfig::load_with(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9191);
        assert_eq!(config.endpoint.path, "/version");
    }

    fn toml_like(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
