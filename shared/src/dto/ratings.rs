//! Media rating DTOs.

use serde::{Deserialize, Serialize};

/// Media kind vocabulary used only by the ratings endpoints: `movie` / `tv`,
/// not the `movie` / `show` split of bookmarks and progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingMediaType {
    Movie,
    Tv,
}

/// A single rating. Note the numeric `tmdb_id`: the ratings endpoints are
/// the only part of the API using numbers instead of id strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRating {
    pub tmdb_id: i64,
    #[serde(rename = "type")]
    pub media_type: RatingMediaType,
    pub rating: f32,
}

/// Response of `GET /users/{userId}/ratings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetUserRatingsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub ratings: Vec<UserRating>,
}

/// Rating upsert request (`POST /users/{userId}/ratings`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetUserRatingRequest {
    pub tmdb_id: i64,
    #[serde(rename = "type")]
    pub media_type: RatingMediaType,
    pub rating: f32,
}

/// Response of a rating upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetUserRatingResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub rating: UserRating,
}
