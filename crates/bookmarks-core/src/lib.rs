//! bookmarks-core: Core types for the bookmarks service
//!
//! This crate provides:
//! - The `Bookmark` record and its `BookmarkId`
//! - `NewBookmark`, a validated create request
//! - `ValidationError` describing which required field was missing
//!
//! It has no knowledge of HTTP or storage; the store and server crates build on it.

pub mod types;
pub mod validation;

pub use types::{Bookmark, BookmarkId, default_rating};
pub use validation::{NewBookmark, ValidationError};
