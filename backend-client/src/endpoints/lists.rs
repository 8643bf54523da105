//! # List Endpoints
//!
//! The backend routes get/create/update through `/users/{userId}/list` but
//! delete through `/users/{userId}/lists/{listId}`. The mismatch is the
//! server's, reproduced here verbatim.

use shared::dto::list::{
    CreateListRequest, CreateListResponse, DeleteListResponse, GetListsResponse,
    UpdateListRequest, UpdateListResponse,
};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// Fetch all of a user's lists with their items.
pub async fn get_lists(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<GetListsResponse> {
    let request = client
        .http()
        .get(format!("{}/users/{}/list", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_lists", request).await
}

/// Create a list, optionally seeded with items.
pub async fn create_list(
    client: &BackendClient,
    user_id: &str,
    request: &CreateListRequest,
    token: &str,
) -> Result<CreateListResponse> {
    let request = client
        .http()
        .post(format!("{}/users/{}/list", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("create_list", request).await
}

/// Rename a list and/or add and remove items. The target list id travels in
/// the body.
pub async fn update_list(
    client: &BackendClient,
    user_id: &str,
    request: &UpdateListRequest,
    token: &str,
) -> Result<UpdateListResponse> {
    let request = client
        .http()
        .patch(format!("{}/users/{}/list", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("update_list", request).await
}

/// Delete a list and its items.
pub async fn delete_list(
    client: &BackendClient,
    user_id: &str,
    list_id: &str,
    token: &str,
) -> Result<DeleteListResponse> {
    let request = client
        .http()
        .delete(format!(
            "{}/users/{}/lists/{}",
            client.backend_url(),
            user_id,
            list_id
        ))
        .header("Authorization", bearer(token));
    execute("delete_list", request).await
}
