//! In-memory bookmark store.
//!
//! The `BookmarkStore` keeps bookmarks in insertion order inside a single
//! `RwLock`. Every operation holds the lock for its whole duration, so an
//! append or removal is atomic with respect to concurrent requests.

use std::collections::HashSet;
use std::path::Path;

use bookmarks_core::{Bookmark, BookmarkId, NewBookmark};
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};

/// Ordered, process-local collection of bookmarks.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: RwLock<Vec<Bookmark>>,
}

impl BookmarkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `bookmarks`, in the given order.
    ///
    /// Every record must carry a unique id and satisfy the create-time rules.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(bookmarks.len());
        for bookmark in &bookmarks {
            if !seen.insert(bookmark.id) {
                return Err(StoreError::DuplicateBookmark(bookmark.id));
            }
            NewBookmark::validate(
                Some(bookmark.title.clone()),
                Some(bookmark.url.clone()),
                Some(bookmark.description.clone()),
                Some(bookmark.rating.clone()),
            )
            .map_err(|source| StoreError::InvalidSeed {
                id: bookmark.id,
                source,
            })?;
        }

        Ok(Self {
            bookmarks: RwLock::new(bookmarks),
        })
    }

    /// Load a store from a JSON file holding an array of bookmarks.
    pub fn from_seed_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| StoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        let bookmarks: Vec<Bookmark> = serde_json::from_slice(&bytes)?;

        tracing::info!(
            path = %path.display(),
            count = bookmarks.len(),
            "Loaded seed bookmarks"
        );

        Self::with_bookmarks(bookmarks)
    }

    /// All bookmarks in insertion order.
    pub async fn list(&self) -> Vec<Bookmark> {
        self.bookmarks.read().await.clone()
    }

    /// Number of stored bookmarks.
    pub async fn len(&self) -> usize {
        self.bookmarks.read().await.len()
    }

    /// Whether the store holds no bookmarks.
    pub async fn is_empty(&self) -> bool {
        self.bookmarks.read().await.is_empty()
    }

    /// Assign a fresh id to `new` and append it.
    ///
    /// Returns the stored record. A v4 collision is reported as
    /// `DuplicateBookmark` rather than silently overwriting.
    pub async fn insert(&self, new: NewBookmark) -> StoreResult<Bookmark> {
        let id = BookmarkId::new();
        let mut bookmarks = self.bookmarks.write().await;

        if bookmarks.iter().any(|b| b.id == id) {
            return Err(StoreError::DuplicateBookmark(id));
        }

        let bookmark = new.into_bookmark(id);
        bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    /// Fetch a bookmark by id.
    pub async fn get(&self, id: BookmarkId) -> StoreResult<Bookmark> {
        self.bookmarks
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(StoreError::BookmarkNotFound(id))
    }

    /// Remove a bookmark by id, keeping the order of the rest.
    ///
    /// Returns the removed record.
    pub async fn delete(&self, id: BookmarkId) -> StoreResult<Bookmark> {
        let mut bookmarks = self.bookmarks.write().await;
        let index = bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BookmarkNotFound(id))?;
        Ok(bookmarks.remove(index))
    }
}
