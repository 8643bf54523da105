//! Watch-progress DTOs.
//!
//! The write path (`PUT .../progress/{tmdbId}`) sends `duration`/`watched`
//! as millisecond numbers, while the read path (`GET .../progress`, import)
//! reports them back as decimal strings. The types below reproduce that
//! asymmetry instead of papering over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bookmarks::MediaType;

/// Descriptive metadata stored alongside a progress record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressMeta {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
}

/// Progress write request (`PUT /users/{userId}/progress/{tmdbId}`), also
/// the element type of a bulk import.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressItem {
    pub meta: ProgressMeta,
    pub tmdb_id: String,
    pub duration: u64,
    pub watched: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Response of a progress write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProgressResponse {
    pub id: String,
    pub tmdb_id: String,
    pub user_id: String,
    pub season_id: Option<String>,
    pub episode_id: Option<String>,
    pub season_number: Option<u32>,
    pub episode_number: Option<u32>,
    pub meta: ProgressMeta,
    pub duration: u64,
    pub watched: u64,
    pub updated_at: DateTime<Utc>,
}

/// Progress delete request (`DELETE /users/{userId}/progress/{tmdbId}`).
/// Narrows the deletion to one episode when the ids are given; otherwise the
/// whole title's records are removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProgressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
}

/// Response of a progress delete, reporting how many records were removed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProgressResponse {
    pub count: u64,
    pub tmdb_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
}

/// Season reference on a read-path progress record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonRef {
    pub id: Option<String>,
    pub number: Option<u32>,
}

/// Episode reference on a read-path progress record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EpisodeRef {
    pub id: Option<String>,
    pub number: Option<u32>,
}

/// Progress record as listed by `GET /users/{userId}/progress` and echoed by
/// an import. `duration` and `watched` are decimal strings here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: String,
    pub tmdb_id: String,
    pub episode: EpisodeRef,
    pub season: SeasonRef,
    pub meta: ProgressMeta,
    pub duration: String,
    pub watched: String,
    pub updated_at: DateTime<Utc>,
}

/// Response of `PUT /users/{userId}/progress/import`.
///
/// Deployed backends disagree on this body: some return the imported records
/// as a bare array, newer ones wrap them as `{count, items}`. The untagged
/// enum accepts either and hands the caller whichever shape arrived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ImportProgressResponse {
    WithCount { count: u64, items: Vec<UserProgress> },
    Items(Vec<UserProgress>),
}

impl ImportProgressResponse {
    /// The imported records, whichever wrapping the server chose.
    pub fn items(&self) -> &[UserProgress] {
        match self {
            ImportProgressResponse::WithCount { items, .. } => items,
            ImportProgressResponse::Items(items) => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record_json() -> serde_json::Value {
        serde_json::json!({
            "id": "p1",
            "tmdbId": "603",
            "episode": { "id": null, "number": null },
            "season": { "id": null, "number": null },
            "meta": { "title": "The Matrix", "year": 1999, "type": "movie" },
            "duration": "8160000",
            "watched": "4000000",
            "updatedAt": "2024-03-01T12:00:00.000Z"
        })
    }

    #[test]
    fn progress_item_omits_absent_episode_fields() {
        let item = ProgressItem {
            meta: ProgressMeta {
                title: "The Matrix".to_string(),
                year: Some(1999),
                poster: None,
                media_type: MediaType::Movie,
            },
            tmdb_id: "603".to_string(),
            duration: 8_160_000,
            watched: 4_000_000,
            season_id: None,
            episode_id: None,
            season_number: None,
            episode_number: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["tmdbId"], "603");
        assert_eq!(value["duration"], 8_160_000u64);
        assert!(value.get("seasonId").is_none());
        assert!(value.get("episodeNumber").is_none());
    }

    #[test]
    fn import_response_accepts_bare_array() {
        let json = serde_json::Value::Array(vec![sample_record_json()]);
        let response: ImportProgressResponse = serde_json::from_value(json).unwrap();
        assert!(matches!(response, ImportProgressResponse::Items(_)));
        assert_eq!(response.items().len(), 1);
        assert_eq!(response.items()[0].duration, "8160000");
    }

    #[test]
    fn import_response_accepts_count_wrapper() {
        let json = serde_json::json!({ "count": 1, "items": [sample_record_json()] });
        let response: ImportProgressResponse = serde_json::from_value(json).unwrap();
        match &response {
            ImportProgressResponse::WithCount { count, items } => {
                assert_eq!(*count, 1);
                assert_eq!(items[0].tmdb_id, "603");
            }
            other => panic!("expected count wrapper, got {other:?}"),
        }
    }
}
