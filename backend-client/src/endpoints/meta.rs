//! # Meta Endpoint
//!
//! Unauthenticated instance metadata.

use shared::dto::meta::MetaResponse;

use super::execute;
use crate::client::BackendClient;
use crate::error::Result;

/// Fetch backend instance metadata (name, version, captcha requirements).
pub async fn meta(client: &BackendClient) -> Result<MetaResponse> {
    let request = client
        .http()
        .get(format!("{}/meta", client.backend_url()));
    execute("meta", request).await
}
