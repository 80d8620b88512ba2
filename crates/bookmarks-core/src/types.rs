//! Core data types for the bookmarks service.
//!
//! A bookmark is a titled URL with a description and a rating. Ids are
//! minted by the system when a bookmark is created and never change afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a bookmark.
///
/// Wraps a UUID v4. Serialized as the hyphenated UUID string, which is also the
/// form used in `/bookmark/{id}` paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(pub Uuid);

impl BookmarkId {
    /// Creates a new random BookmarkId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a BookmarkId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BookmarkId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Bookmark
// ============================================================================

/// Rating given to bookmarks created without one.
#[must_use]
pub fn default_rating() -> Value {
    Value::from(0)
}

/// A stored bookmark.
///
/// The rating is kept as whatever JSON value it was created with; it is never
/// validated, so an integer stays an integer and a string stays a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// System-assigned identifier.
    pub id: BookmarkId,

    /// Display title. Never empty.
    pub title: String,

    /// Target URL. Never empty; not otherwise validated.
    pub url: String,

    /// Free-text description. Never empty.
    pub description: String,

    /// Rating as supplied, `0` when the key was absent.
    #[serde(default = "default_rating")]
    pub rating: Value,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bookmark {
        Bookmark {
            id: BookmarkId::new(),
            title: "Rust".to_string(),
            url: "https://www.rust-lang.org".to_string(),
            description: "The Rust programming language".to_string(),
            rating: Value::from(5),
        }
    }

    #[test]
    fn bookmark_id_display_fromstr() {
        let id = BookmarkId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36);
        let parsed: BookmarkId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn bookmark_id_rejects_non_uuid() {
        assert!("not-a-uuid".parse::<BookmarkId>().is_err());
        assert!("".parse::<BookmarkId>().is_err());
    }

    #[test]
    fn bookmark_id_serializes_as_plain_string() {
        let id = BookmarkId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn fresh_ids_are_distinct() {
        let a = BookmarkId::new();
        let b = BookmarkId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn bookmark_json_shape() {
        let bookmark = sample();
        let value = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(value["id"], bookmark.id.to_string());
        assert_eq!(value["title"], "Rust");
        assert_eq!(value["url"], "https://www.rust-lang.org");
        assert_eq!(value["description"], "The Rust programming language");
        assert_eq!(value["rating"], 5);
    }

    #[test]
    fn bookmark_without_rating_deserializes_to_zero() {
        let json = r#"{
            "id": "6f1c3e0a-7d0b-4a51-9d47-3f5c6f0f9c11",
            "title": "Docs",
            "url": "https://docs.rs",
            "description": "Crate docs"
        }"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.rating, default_rating());
        assert_eq!(serde_json::to_string(&bookmark.rating).unwrap(), "0");
    }

    #[test]
    fn fractional_rating_is_preserved() {
        let mut bookmark = sample();
        bookmark.rating = Value::from(4.5);
        let value = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(value["rating"], 4.5);
    }

    #[test]
    fn explicit_null_rating_is_not_defaulted() {
        let json = r#"{
            "id": "6f1c3e0a-7d0b-4a51-9d47-3f5c6f0f9c11",
            "title": "Docs",
            "url": "https://docs.rs",
            "description": "Crate docs",
            "rating": null
        }"#;
        let bookmark: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bookmark.rating, Value::Null);
    }
}
