//! API error types and the terminal error responder.
//!
//! Expected failures (auth, validation, not found) turn directly into their
//! final response. Anything else becomes an [`UnexpectedFailure`]: a bare 500
//! carrying the failure as a response extension, which [`error_responder`]
//! rewrites into the environment-specific body. Handler panics take the same
//! path through [`panic_response`].

use std::any::Any;

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use bookmarks_core::ValidationError;
use bookmarks_store::StoreError;
use serde::Serialize;

use crate::config::Environment;

/// Body of every 400 response.
pub const INVALID_DATA: &str = "Invalid data";

/// Body of every 404 response.
pub const BOOKMARK_NOT_FOUND: &str = "Bookmark not found";

/// Message of every 401 response.
pub const UNAUTHORIZED_REQUEST: &str = "Unauthorized request";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or mismatched bearer token (401).
    #[error("unauthorized request")]
    Unauthorized,

    /// Create payload rejected (400).
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// No bookmark with the requested id (404). Holds the id as requested.
    #[error("bookmark not found: {0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::BookmarkNotFound(id) => Self::NotFound(id.to_string()),
            other => Self::Store(other),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidData(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of a 401 response.
#[derive(Debug, Serialize)]
pub struct UnauthorizedBody {
    pub error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(UnauthorizedBody {
                    error: UNAUTHORIZED_REQUEST,
                }),
            )
                .into_response(),
            Self::InvalidData(reason) => {
                tracing::error!("{}", reason);
                (StatusCode::BAD_REQUEST, INVALID_DATA).into_response()
            }
            Self::NotFound(id) => {
                tracing::error!("Bookmark not found at {}", id);
                (StatusCode::NOT_FOUND, BOOKMARK_NOT_FOUND).into_response()
            }
            err @ (Self::Internal(_) | Self::Store(_)) => {
                UnexpectedFailure::new(err.to_string(), format!("{err:?}")).into_response()
            }
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Error Responder
// ============================================================================

/// A failure no handler anticipated.
///
/// Travels as a response extension until [`error_responder`] renders it.
#[derive(Debug, Clone)]
pub struct UnexpectedFailure {
    /// Short human-readable message.
    pub message: String,
    /// Full diagnostic detail, never shown in production.
    pub detail: String,
}

impl UnexpectedFailure {
    pub fn new(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Render the client-facing body for `environment`.
    pub fn body(&self, environment: Environment) -> serde_json::Value {
        if environment.is_production() {
            serde_json::json!({ "error": { "message": "server error" } })
        } else {
            serde_json::json!({
                "message": self.message,
                "error": {
                    "message": self.message,
                    "detail": self.detail,
                },
            })
        }
    }
}

impl IntoResponse for UnexpectedFailure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// Middleware that renders unexpected failures as the final 500 response.
pub async fn error_responder(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let Some(failure) = response.extensions_mut().remove::<UnexpectedFailure>() else {
        return response;
    };

    if environment.is_production() {
        tracing::error!(message = %failure.message, "Unexpected failure");
    } else {
        tracing::error!(
            message = %failure.message,
            detail = %failure.detail,
            "Unexpected failure"
        );
    }

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(failure.body(environment)),
    )
        .into_response()
}

/// Convert a caught handler panic into an unexpected failure.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    UnexpectedFailure::new(message.clone(), format!("handler panicked: {message}"))
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, body::to_bytes, middleware, routing::get};
    use bookmarks_core::BookmarkId;
    use http::Request;
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    fn failing_router(environment: Environment) -> Router {
        Router::new()
            .route(
                "/fail",
                get(|| async { Err::<(), _>(ApiError::Internal("disk on fire".to_string())) }),
            )
            .route(
                "/panic",
                get(|| async {
                    if true {
                        panic!("handler blew up");
                    }
                }),
            )
            .route("/ok", get(|| async { "fine" }))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(middleware::from_fn_with_state(environment, error_responder))
    }

    async fn call(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidData("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let id = BookmarkId::new();
        let err: ApiError = StoreError::BookmarkNotFound(id).into();
        assert!(matches!(err, ApiError::NotFound(ref s) if *s == id.to_string()));

        let err: ApiError = StoreError::DuplicateBookmark(id).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_maps_to_invalid_data() {
        let err: ApiError = ValidationError::MissingUrl.into();
        assert!(matches!(err, ApiError::InvalidData(ref s) if s == "URL is required"));
    }

    #[test]
    fn test_production_body_hides_detail() {
        let failure = UnexpectedFailure::new("boom", "secret detail");
        let body = failure.body(Environment::Production);
        assert_eq!(body, serde_json::json!({ "error": { "message": "server error" } }));
    }

    #[test]
    fn test_development_body_exposes_detail() {
        let failure = UnexpectedFailure::new("boom", "secret detail");
        let body = failure.body(Environment::Development);
        assert_eq!(body["message"], "boom");
        assert_eq!(body["error"]["message"], "boom");
        assert_eq!(body["error"]["detail"], "secret detail");
    }

    #[tokio::test]
    async fn test_internal_error_in_production() {
        let (status, body) = call(failing_router(Environment::Production), "/fail").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, r#"{"error":{"message":"server error"}}"#);
    }

    #[tokio::test]
    async fn test_internal_error_in_development() {
        let (status, body) = call(failing_router(Environment::Development), "/fail").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], "internal error: disk on fire");
        assert!(value["error"]["detail"].as_str().unwrap().contains("disk on fire"));
    }

    #[tokio::test]
    async fn test_panic_is_rendered() {
        let (status, body) = call(failing_router(Environment::Test), "/panic").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["message"], "handler blew up");

        let (status, body) = call(failing_router(Environment::Production), "/panic").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("blew up"));
    }

    #[tokio::test]
    async fn test_successful_response_untouched() {
        let (status, body) = call(failing_router(Environment::Production), "/ok").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "fine");
    }
}
