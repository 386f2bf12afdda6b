//! HTTP error handling and conversion.
//!
//! Lookup failures are never errors here; they render as HTTP 200 bodies.
//! `ApiError` covers the cases where no lookup outcome could be produced, and
//! still renders the same flat JSON shape so clients never see a malformed
//! body.

use crate::responses::VersionCheckResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use item_version_application::ApplicationError;
use thiserror::Error;
use tracing::error;

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Application layer error
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Internal server error
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Application(err) => StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API response
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Application(err) => err.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Client-facing message; internal details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Application(ApplicationError::Catalog(_)) => {
                "The product catalog is currently unavailable."
            }
            Self::Application(ApplicationError::Internal(_)) | Self::Internal(_) => {
                "An internal error occurred."
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        error!(
            error_code = error_code,
            status = %status,
            details = %self,
            "Request error"
        );

        VersionCheckResponse::error(error_code, self.public_message()).into_response_with(status)
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use item_version_application::CatalogError;

    #[test]
    fn test_catalog_errors_map_to_503() {
        let err = ApiError::from(ApplicationError::from(CatalogError::Timeout));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_code(), "CATALOG_UNAVAILABLE");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::Internal("stack trace here".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "An internal error occurred.");
    }
}
