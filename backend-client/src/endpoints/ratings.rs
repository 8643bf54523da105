//! # Rating Endpoints

use shared::dto::ratings::{GetUserRatingsResponse, SetUserRatingRequest, SetUserRatingResponse};

use super::{bearer, execute};
use crate::client::BackendClient;
use crate::error::Result;

/// Fetch all of a user's ratings.
pub async fn get_ratings(
    client: &BackendClient,
    user_id: &str,
    token: &str,
) -> Result<GetUserRatingsResponse> {
    let request = client
        .http()
        .get(format!("{}/users/{}/ratings", client.backend_url(), user_id))
        .header("Authorization", bearer(token));
    execute("get_ratings", request).await
}

/// Upsert the rating for one title.
pub async fn set_rating(
    client: &BackendClient,
    user_id: &str,
    request: &SetUserRatingRequest,
    token: &str,
) -> Result<SetUserRatingResponse> {
    let request = client
        .http()
        .post(format!("{}/users/{}/ratings", client.backend_url(), user_id))
        .header("Authorization", bearer(token))
        .json(request);
    execute("set_rating", request).await
}
