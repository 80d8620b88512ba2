//! Error types for the storage layer.

use std::path::PathBuf;

use bookmarks_core::{BookmarkId, ValidationError};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No bookmark with this id.
    #[error("bookmark not found: {0}")]
    BookmarkNotFound(BookmarkId),

    /// A bookmark with this id is already stored.
    #[error("duplicate bookmark: {0}")]
    DuplicateBookmark(BookmarkId),

    /// Seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A seeded bookmark breaks the create-time rules.
    #[error("invalid seeded bookmark {id}: {source}")]
    InvalidSeed {
        id: BookmarkId,
        #[source]
        source: ValidationError,
    },

    /// Seed file is not a JSON array of bookmarks.
    #[error("invalid seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}
