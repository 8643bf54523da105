//! Bookmark DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media kind used by bookmarks and watch progress.
///
/// Serializes to lowercase `movie` / `show`. The ratings endpoints use a
/// different vocabulary, see [`super::ratings::RatingMediaType`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Show,
}

/// Descriptive metadata stored alongside a bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookmarkMeta {
    pub title: String,
    pub year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// Bookmark creation request (`POST /users/{userId}/bookmarks/{tmdbId}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBookmarkRequest {
    pub meta: BookmarkMeta,
}

/// Stored bookmark as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub tmdb_id: String,
    pub meta: BookmarkMeta,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a bulk bookmark replace (`PUT /users/{userId}/bookmarks`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkInput {
    pub tmdb_id: String,
    pub meta: BookmarkMeta,
}

/// Response of `DELETE /users/{userId}/bookmarks/{tmdbId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBookmarkResponse {
    pub success: bool,
    pub tmdb_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_meta_uses_type_key_and_lowercase_kind() {
        let meta = BookmarkMeta {
            title: "Heat".to_string(),
            year: 1995,
            poster: None,
            media_type: MediaType::Movie,
        };

        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["type"], "movie");
        assert!(value.get("poster").is_none());

        let back: BookmarkMeta = serde_json::from_value(value).unwrap();
        assert_eq!(back, meta);
    }
}
