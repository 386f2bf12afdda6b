//! Application layer for the item version check service
//!
//! This crate holds the request pipeline that turns a raw item name into one
//! of the four lookup outcomes.
//!
//! ## Modules
//!
//! - `services` - Catalog port, lookup resolver and the version check service
//! - `validation` - Item name sanitisation

pub mod services;
pub mod validation;

// Re-export commonly used types
pub use services::{
    CatalogError, LookupResolver, ProductCatalog, ServiceContext, VersionCheckService,
};
pub use validation::ItemName;

use thiserror::Error;

/// Application-level errors
///
/// Missing names, unknown names and missing versions are lookup outcomes, not
/// errors. Only failures of the catalog itself end up here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The catalog could not answer
    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::Catalog(_) => 503,
            ApplicationError::Internal(_) => 500,
        }
    }

    /// Check if this error is retryable by the client
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApplicationError::Catalog(err) if err.is_transient())
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::Catalog(_) => "CATALOG_UNAVAILABLE",
            ApplicationError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_http_status() {
        let err = ApplicationError::from(CatalogError::Unavailable("down".to_string()));
        assert_eq!(err.http_status(), 503);
        assert_eq!(err.error_code(), "CATALOG_UNAVAILABLE");
        assert_eq!(ApplicationError::Internal("test".to_string()).http_status(), 500);
    }

    #[test]
    fn test_error_retryable() {
        assert!(ApplicationError::from(CatalogError::Timeout).is_retryable());
        assert!(!ApplicationError::from(CatalogError::Corrupt("bad row".to_string())).is_retryable());
        assert!(!ApplicationError::Internal("test".to_string()).is_retryable());
    }
}
