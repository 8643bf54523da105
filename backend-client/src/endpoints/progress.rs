//! # Watch-Progress Endpoints

use shared::dto::progress::{
    DeleteProgressRequest, DeleteProgressResponse, ImportProgressResponse, ProgressItem,
    UpdateProgressResponse, UserProgress,
};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// List a user's progress records.
pub async fn get_progress(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<Vec<UserProgress>> {
    let request = client
        .http()
        .get(format!("{}/users/{}/progress", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_progress", request).await
}

/// Write the progress record for one title (or one episode of it).
pub async fn update_progress(
    client: &BackendClient,
    user_id: &str,
    tmdb_id: &str,
    request: &ProgressItem,
    token: &str,
) -> Result<UpdateProgressResponse> {
    let request = client
        .http()
        .put(format!(
            "{}/users/{}/progress/{}",
            client.backend_url(),
            user_id,
            tmdb_id
        ))
        .header("Authorization", bearer(token))
        .json(request);
    execute("update_progress", request).await
}

/// Delete progress for one title, optionally narrowed to one episode via the
/// request body.
pub async fn delete_progress(
    client: &BackendClient,
    user_id: &str,
    tmdb_id: &str,
    request: &DeleteProgressRequest,
    token: &str,
) -> Result<DeleteProgressResponse> {
    let request = client
        .http()
        .delete(format!(
            "{}/users/{}/progress/{}",
            client.backend_url(),
            user_id,
            tmdb_id
        ))
        .header("Authorization", bearer(token))
        .json(request);
    execute("delete_progress", request).await
}

/// Import a batch of progress records, e.g. migrated from another instance.
/// See [`ImportProgressResponse`] for the two response shapes deployed
/// backends produce.
#[tracing::instrument(skip(client, items, token), fields(count = items.len()))]
pub async fn import_progress(
    client: &BackendClient,
    user_id: &str,
    items: &[ProgressItem],
    token: &str,
) -> Result<ImportProgressResponse> {
    let request = client
        .http()
        .put(format!(
            "{}/users/{}/progress/import",
            client.backend_url(),
            user_id
        ))
        .header("Authorization", bearer(token))
        .json(items);
    execute("import_progress", request).await
}
