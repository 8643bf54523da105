//! # Session Endpoints
//!
//! Device session management. Sessions are created by the auth flows; these
//! endpoints rename, revoke and enumerate them.

use shared::dto::session::{
    DeleteSessionResponse, SessionResponse, UpdateSessionRequest, UserSession,
};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// Rename a session's device.
pub async fn update_session(
    client: &BackendClient,
    session_id: &str,
    request: &UpdateSessionRequest,
    token: &str,
) -> Result<SessionResponse> {
    let request = client
        .http()
        .patch(format!("{}/sessions/{}", client.backend_url(), session_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("update_session", request).await
}

/// Revoke a session. Revoking the session backing the presented token logs
/// the client out server-side; the locally stored token is untouched.
pub async fn delete_session(
    client: &BackendClient,
    session_id: &str,
    token: &str,
) -> Result<DeleteSessionResponse> {
    let request = client
        .http()
        .delete(format!("{}/sessions/{}", client.backend_url(), session_id))
        .header("Authorization", bearer(token));
    execute("delete_session", request).await
}

/// List a user's sessions.
pub async fn get_user_sessions(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<Vec<UserSession>> {
    let request = client
        .http()
        .get(format!("{}/users/{}/sessions", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_user_sessions", request).await
}
