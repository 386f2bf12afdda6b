//! Version check endpoint.
//!
//! Answers any HTTP method on the configured path. The raw query string is
//! decoded here, exactly once, so that repeated or malformed parameters can
//! never turn into a non-JSON rejection.

use crate::{
    error::ApiResult,
    middleware::RequestId,
    responses::VersionCheckResponse,
    state::AppState,
};
use axum::{
    extract::{RawQuery, State},
    routing::any,
    Extension, Router,
};
use item_version_application::ServiceContext;
use item_version_common::validation::query_param;
use item_version_domain::LookupRequest;

/// Query parameter carrying the product name
pub const ITEM_NAME_PARAM: &str = "item_name";

/// Mount the version check handler on `path` and `path/`
pub fn register_endpoint(router: Router<AppState>, path: &str) -> Router<AppState> {
    let trimmed = path.trim_end_matches('/');
    router
        .route(trimmed, any(check_version))
        .route(&format!("{}/", trimmed), any(check_version))
}

/// Build the lookup request from a raw query string
pub fn lookup_request(raw_query: Option<&str>) -> LookupRequest {
    LookupRequest {
        item_name: raw_query.and_then(|q| query_param(q, ITEM_NAME_PARAM)),
    }
}

/// Look up the current version of a product
///
/// Always answers HTTP 200 for lookup outcomes; `success` and `error_code`
/// carry the result.
#[utoipa::path(
    get,
    path = "/edd-version-check",
    tag = "version",
    params(
        ("item_name" = Option<String>, Query, description = "URL-encoded product display name")
    ),
    responses(
        (status = 200, description = "Lookup outcome", body = VersionCheckResponse,
            content_type = "application/json; charset=utf-8"),
        (status = 503, description = "Catalog unavailable", body = VersionCheckResponse)
    )
)]
pub async fn check_version(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    RawQuery(raw_query): RawQuery,
) -> ApiResult<VersionCheckResponse> {
    let ctx = match request_id {
        Some(Extension(id)) => ServiceContext::new(id.0),
        None => ServiceContext::default(),
    };

    let request = lookup_request(raw_query.as_deref());
    let result = state.version_check.check(&ctx, &request).await?;

    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_request_from_query() {
        assert_eq!(lookup_request(None), LookupRequest::empty());
        assert_eq!(lookup_request(Some("foo=bar")), LookupRequest::empty());
        assert_eq!(
            lookup_request(Some("item_name=My%20Widget&foo=bar")),
            LookupRequest::new("My Widget")
        );
        assert_eq!(
            lookup_request(Some("item_name=First&item_name=Second")),
            LookupRequest::new("Second")
        );
    }
}
