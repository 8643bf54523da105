//! Per-account application settings DTOs.

use serde::{Deserialize, Serialize};

/// Settings record returned by `GET`/`PUT /users/{userId}/settings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: String,
    pub application_theme: Option<String>,
    pub application_language: String,
    pub default_subtitle_language: Option<String>,
    pub proxy_urls: Option<Vec<String>>,
    pub trakt_key: Option<String>,
    pub febbox_key: Option<String>,
}

/// Settings write request. `application_language` is the only required
/// field; absent optionals are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettingsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_theme: Option<String>,
    pub application_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_subtitle_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trakt_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub febbox_key: Option<String>,
}
