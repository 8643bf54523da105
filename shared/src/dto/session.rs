//! Device session management DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session edit request (`PATCH /sessions/{sessionId}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
}

/// Session record with the `current` marker relative to the presented token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub accessed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub device: String,
    pub user_agent: String,
    pub current: bool,
}

/// Response of `DELETE /sessions/{sessionId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteSessionResponse {
    pub id: String,
}

/// Session record as listed by `GET /users/{userId}/sessions`. Unlike
/// [`super::auth::Session`] the owner field is spelled `userId` and no expiry
/// is reported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub accessed_at: DateTime<Utc>,
    pub device: String,
    pub user_agent: String,
}
