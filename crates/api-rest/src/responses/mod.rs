//! Standardized API response types.
//!
//! Version check bodies are flat JSON objects:
//!
//! ```json
//! { "success": true, "error_code": null, "version": "2.3.1", "message": "..." }
//! ```
//!
//! `version` is only present on success. Lookup outcomes are always sent with
//! HTTP 200; failures are application-level, not transport-level.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use item_version_domain::LookupResult;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Content type of every version check body
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Version check response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VersionCheckResponse {
    /// Whether a version was found
    pub success: bool,

    /// Failure code, null on success
    #[schema(example = "NAME_MISSING")]
    pub error_code: Option<String>,

    /// Published version, present on success only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2.3.1")]
    pub version: Option<String>,

    /// Human-readable message
    pub message: String,
}

impl VersionCheckResponse {
    /// Failure body with an arbitrary code
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: Some(code.into()),
            version: None,
            message: message.into(),
        }
    }

    /// Serialize the body
    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Render with an explicit status code
    pub fn into_response_with(self, status: StatusCode) -> Response {
        match self.to_bytes() {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                body,
            )
                .into_response(),
            Err(err) => {
                error!(error = %err, "Failed to serialize response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl From<LookupResult> for VersionCheckResponse {
    fn from(result: LookupResult) -> Self {
        match result {
            LookupResult::Success { version, message } => Self {
                success: true,
                error_code: None,
                version: Some(version),
                message,
            },
            LookupResult::Failure { code, message } => Self::error(code.as_str(), message),
        }
    }
}

impl IntoResponse for VersionCheckResponse {
    fn into_response(self) -> Response {
        self.into_response_with(StatusCode::OK)
    }
}

/// Render a lookup outcome as `(status, content type, body)`
pub fn render(result: LookupResult) -> serde_json::Result<(StatusCode, &'static str, Vec<u8>)> {
    let body = VersionCheckResponse::from(result).to_bytes()?;
    Ok((StatusCode::OK, JSON_CONTENT_TYPE, body))
}

/// Standard wrapper for auxiliary endpoints such as health checks
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,

    /// Response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create a failure response carrying data and a message
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
