//! Route definitions and the full middleware stack.

pub mod bookmarks;

use axum::{Router, middleware};
use http::HeaderValue;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_api_token;
use crate::error::{error_responder, panic_response};
use crate::middleware::request_id::{RequestIdSpan, propagate_request_id, request_id_layer};
use crate::middleware::security_headers::security_headers;
use crate::state::AppState;

/// Build the router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new().merge(bookmarks::routes()).with_state(state)
}

/// Build the complete application.
///
/// Layers run outermost first: request id, tracing, security headers, CORS,
/// request id echo, auth gate, error responder, panic catcher, then the routes.
pub fn build_app(state: AppState) -> Router {
    let environment = state.config().environment;
    let cors = build_cors_layer(&state.config().cors_allowed_origins);

    build_router(state.clone())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(environment, error_responder))
        .layer(middleware::from_fn_with_state(state, require_api_token))
        .layer(middleware::from_fn(propagate_request_id))
        .layer(cors)
        .layer(middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http().make_span_with(RequestIdSpan))
        .layer(request_id_layer())
}

/// Build CORS layer from configuration.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    let allow_origin = if allowed_origins.trim() == "*" {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
