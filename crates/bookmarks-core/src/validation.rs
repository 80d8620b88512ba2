//! Create-time validation for bookmarks.

use serde_json::Value;
use thiserror::Error;

use crate::types::{Bookmark, BookmarkId, default_rating};

/// A required field was missing or empty on create.
///
/// Fields are checked in the order title, url, description; the first
/// missing one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("URL is required")]
    MissingUrl,

    #[error("Description is required")]
    MissingDescription,
}

/// A bookmark that passed validation but has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: Value,
}

impl NewBookmark {
    /// Validate raw create fields.
    ///
    /// `title`, `url` and `description` must be present and non-empty. The
    /// rating is taken as-is, whatever its JSON type; `None` (key absent)
    /// becomes `0`.
    pub fn validate(
        title: Option<String>,
        url: Option<String>,
        description: Option<String>,
        rating: Option<Value>,
    ) -> Result<Self, ValidationError> {
        let title = non_empty(title).ok_or(ValidationError::MissingTitle)?;
        let url = non_empty(url).ok_or(ValidationError::MissingUrl)?;
        let description = non_empty(description).ok_or(ValidationError::MissingDescription)?;

        Ok(Self {
            title,
            url,
            description,
            rating: rating.unwrap_or_else(default_rating),
        })
    }

    /// Attach an id, producing the stored record.
    #[must_use]
    pub fn into_bookmark(self, id: BookmarkId) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            rating: self.rating,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
