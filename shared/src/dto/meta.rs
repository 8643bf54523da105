//! Backend instance metadata DTOs.

use serde::{Deserialize, Serialize};

/// Instance description returned by `GET /meta`. `captcha_client_key` is
/// only present when `has_captcha` is true.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetaResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
    pub has_captcha: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_client_key: Option<String>,
}
