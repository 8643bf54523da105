//! # Settings Endpoints

use shared::dto::settings::{UpdateUserSettingsRequest, UserSettings};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// Fetch a user's application settings.
pub async fn get_settings(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<UserSettings> {
    let request = client
        .http()
        .get(format!("{}/users/{}/settings", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_settings", request).await
}

/// Write a user's application settings.
pub async fn update_settings(
    client: &BackendClient,
    user_id: &str,
    request: &UpdateUserSettingsRequest,
    token: &str,
) -> Result<UserSettings> {
    let request = client
        .http()
        .put(format!("{}/users/{}/settings", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("update_settings", request).await
}
