//! bookmarks-store: Storage layer for the bookmarks service
//!
//! This crate provides:
//! - `BookmarkStore`, an ordered in-memory list of bookmarks behind one lock
//! - Optional seeding from a JSON file at startup
//!
//! Nothing is persisted; the store lives as long as the process.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bookmarks_store::BookmarkStore;
//!
//! let store = BookmarkStore::new();
//! let created = store.insert(new_bookmark).await?;
//! let fetched = store.get(created.id).await?;
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::BookmarkStore;

// Re-export bookmarks-core for downstream crates
pub use bookmarks_core;
