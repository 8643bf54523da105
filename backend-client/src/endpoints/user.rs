//! # User Endpoints
//!
//! Current-user lookup, profile edits and account deletion.

use shared::dto::auth::User;
use shared::dto::user::{UserDeleteResponse, UserEditRequest, UserInfoResponse};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// Fetch the authenticated user and the session backing the token.
pub async fn get_user_info(client: &BackendClient, token: &str) -> Result<UserInfoResponse> {
    let request = client
        .http()
        .get(format!("{}/users/@me", client.backend_url()))
        .header("Authorization", bearer(token));
    execute("get_user_info", request).await
}

/// Edit a user's profile.
pub async fn edit_user(
    client: &BackendClient,
    user_id: &str,
    request: &UserEditRequest,
    token: &str,
) -> Result<User> {
    let request = client
        .http()
        .patch(format!("{}/users/{}", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("edit_user", request).await
}

/// Delete a user account and everything attached to it.
#[tracing::instrument(skip(client, token))]
pub async fn delete_user(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<UserDeleteResponse> {
    let request = client
        .http()
        .delete(format!("{}/users/{}", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("delete_user", request).await
}
