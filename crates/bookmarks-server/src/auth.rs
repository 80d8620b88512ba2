//! Bearer token gate applied to every request.
//!
//! The credential is the second space-separated segment of the
//! `Authorization` header (`Bearer <token>`), compared exactly against the
//! configured `API_TOKEN`. With no token configured nothing is accepted.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Extract the credential from an `Authorization` header value.
pub fn bearer_credential(header_value: &str) -> Option<&str> {
    header_value.split(' ').nth(1)
}

/// Whether `presented` matches the configured token.
///
/// An unset or empty expected token never matches, not even an empty
/// credential.
pub fn token_matches(expected: Option<&str>, presented: Option<&str>) -> bool {
    match (expected, presented) {
        (Some(expected), Some(presented)) => !expected.is_empty() && expected == presented,
        _ => false,
    }
}

/// Middleware rejecting requests without the configured bearer token.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_credential);

    if !token_matches(state.config().api_token.as_deref(), presented) {
        tracing::error!("Unauthorized request to path: {}", request.uri().path());
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}
