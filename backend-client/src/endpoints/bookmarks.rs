//! # Bookmark Endpoints

use shared::dto::bookmarks::{
    BookmarkInput, BookmarkResponse, CreateBookmarkRequest, DeleteBookmarkResponse,
};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// List a user's bookmarks.
pub async fn get_bookmarks(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<Vec<BookmarkResponse>> {
    let request = client
        .http()
        .get(format!("{}/users/{}/bookmarks", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_bookmarks", request).await
}

/// Create (or overwrite) the bookmark for one title.
pub async fn create_bookmark(
    client: &BackendClient,
    user_id: &str,
    tmdb_id: &str,
    request: &CreateBookmarkRequest,
    token: &str,
) -> Result<BookmarkResponse> {
    let request = client
        .http()
        .post(format!(
            "{}/users/{}/bookmarks/{}",
            client.backend_url(),
            user_id,
            tmdb_id
        ))
        .header("Authorization", bearer(token))
        .json(request);
    execute("create_bookmark", request).await
}

/// Replace a user's bookmarks wholesale.
pub async fn bulk_update_bookmarks(
    client: &BackendClient,
    user_id: &str,
    bookmarks: &[BookmarkInput],
    token: &str,
) -> Result<Vec<BookmarkResponse>> {
    let request = client
        .http()
        .put(format!("{}/users/{}/bookmarks", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(bookmarks);
    execute("bulk_update_bookmarks", request).await
}

/// Remove the bookmark for one title.
pub async fn delete_bookmark(
    client: &BackendClient,
    user_id: &str,
    tmdb_id: &str,
    token: &str,
) -> Result<DeleteBookmarkResponse> {
    let request = client
        .http()
        .delete(format!(
            "{}/users/{}/bookmarks/{}",
            client.backend_url(),
            user_id,
            tmdb_id
        ))
        .header("Authorization", bearer(token));
    execute("delete_bookmark", request).await
}
