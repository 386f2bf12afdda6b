//! Panic handling.

use crate::responses::VersionCheckResponse;
use axum::{http::StatusCode, response::Response};
use tracing::error;

/// Convert a handler panic into a well-formed JSON 500
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!(details = %details, "Handler panicked");

    VersionCheckResponse::error("INTERNAL_ERROR", "An internal error occurred.")
        .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
