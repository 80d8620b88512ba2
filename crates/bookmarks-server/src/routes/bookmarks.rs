//! Bookmark routes.
//!
//! - GET /bookmarks - List every bookmark in insertion order
//! - POST /bookmarks - Create a bookmark
//! - GET /bookmark/{id} - Fetch one bookmark
//! - DELETE /bookmark/{id} - Delete one bookmark

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    routing::get,
};
use bookmarks_core::{Bookmark, BookmarkId, NewBookmark};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /bookmarks.
///
/// Every field is optional at this layer so that missing fields reach
/// validation instead of failing deserialization. `rating` is `None` only
/// when the key is absent; an explicit `null` arrives as `Some(Value::Null)`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub rating: Option<Value>,
}

/// Any value that is present, `null` included.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a path id. Anything that is not a UUID cannot name a bookmark.
fn parse_id(raw: &str) -> ApiResult<BookmarkId> {
    raw.parse().map_err(|_| ApiError::NotFound(raw.to_string()))
}

/// Canonical URL of a bookmark.
fn bookmark_location(public_url: &str, id: BookmarkId) -> String {
    format!("{}/bookmark/{}", public_url, id)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /bookmarks - List all bookmarks.
async fn list_bookmarks(State(state): State<AppState>) -> Json<Vec<Bookmark>> {
    Json(state.store().list().await)
}

/// POST /bookmarks - Create a bookmark.
///
/// # Response
///
/// - 201 Created: the bookmark, with a `Location` header
/// - 400 Bad Request: `Invalid data`, also for a body that is not JSON
async fn create_bookmark(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookmarkRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, [(HeaderName, String); 1], Json<Bookmark>)> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidData(e.body_text()))?;

    let new = NewBookmark::validate(
        request.title,
        request.url,
        request.description,
        request.rating,
    )?;

    let bookmark = state.store().insert(new).await?;

    tracing::info!(id = %bookmark.id, "Bookmark with {} created", bookmark.id);

    let location = bookmark_location(&state.config().public_url, bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(bookmark),
    ))
}

/// GET /bookmark/{id} - Fetch a bookmark.
async fn get_bookmark(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Bookmark>> {
    let id = parse_id(&raw_id)?;
    let bookmark = state.store().get(id).await?;
    Ok(Json(bookmark))
}

/// DELETE /bookmark/{id} - Delete a bookmark.
async fn delete_bookmark(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&raw_id)?;
    state.store().delete(id).await?;

    tracing::info!(id = %id, "Bookmark with id {} deleted.", id);

    Ok(StatusCode::NO_CONTENT)
}

/// Build bookmark routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route("/bookmark/{id}", get(get_bookmark).delete(delete_bookmark))
}

// ============================================================================
// Tests
// ============================================================================
