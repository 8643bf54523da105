//! Provider telemetry DTOs.
//!
//! Metrics submission is anonymous: `POST`/`PUT /metrics/providers` takes no
//! bearer token and the response body is a bare JSON boolean.

use serde::{Deserialize, Serialize};

/// Outcome report for one provider attempt on one title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsProviderItem {
    pub tmdb_id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_id: Option<String>,
    pub status: String,
    pub provider_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_error: Option<String>,
}

/// Provider metrics batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsProvidersRequest {
    pub items: Vec<MetricsProviderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}
