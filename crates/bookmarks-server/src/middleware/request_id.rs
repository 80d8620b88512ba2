//! Per-request ids.
//!
//! Every request gets an `x-request-id`: the caller's own if it sent one,
//! otherwise a fresh UUID. The id is recorded on the request's tracing span,
//! so the auth, create/delete and unexpected-failure log lines all carry it,
//! and it is echoed on the response.

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderName;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::trace::MakeSpan;
use tracing::Span;
use uuid::Uuid;

/// Header carrying the request id in both directions.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Mints a UUID v4 for requests that arrive without an id.
#[derive(Clone, Copy, Debug, Default)]
pub struct BookmarkRequestId;

impl MakeRequestId for BookmarkRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        Uuid::new_v4().to_string().parse().ok().map(RequestId::new)
    }
}

/// Assigns request ids. Must sit outside the trace layer so the span sees the id.
pub fn request_id_layer() -> SetRequestIdLayer<BookmarkRequestId> {
    SetRequestIdLayer::new(HeaderName::from_static(REQUEST_ID_HEADER), BookmarkRequestId)
}

/// The id assigned by [`request_id_layer`], or `-` when there is none.
pub fn request_id_of<B>(request: &http::Request<B>) -> &str {
    request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
}

/// Span factory for `TraceLayer` that tags each request span with its id.
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdSpan;

impl<B> MakeSpan<B> for RequestIdSpan {
    fn make_span(&mut self, request: &http::Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = request_id_of(request),
        )
    }
}

/// Middleware that echoes the request id on the response.
pub async fn propagate_request_id(request: Request, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.header_value().clone());

    let mut response = next.run(request).await;

    if let Some(id) = request_id {
        response.headers_mut().insert(REQUEST_ID_HEADER, id);
    }

    response
}
