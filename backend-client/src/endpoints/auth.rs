//! # Authentication Endpoints
//!
//! Challenge/response registration and login. Each flow is two round trips:
//! `*_start` yields a challenge, `*_complete` answers it with a signed
//! [`ChallengeSubmission`](shared::dto::auth::ChallengeSubmission) and
//! returns the session token.
//!
//! These functions do not touch client token state; storing the returned
//! token is the facade's job.

use shared::dto::auth::{
    LoginCompleteRequest, LoginCompleteResponse, LoginStartRequest, LoginStartResponse,
    RegisterCompleteRequest, RegisterCompleteResponse, RegisterStartRequest,
    RegisterStartResponse,
};

use super::execute;
use crate::client::BackendClient;
use crate::error::Result;

/// Request a registration challenge.
pub async fn register_start(
    client: &BackendClient,
    request: &RegisterStartRequest,
) -> Result<RegisterStartResponse> {
    let request = client
        .http()
        .post(format!("{}/auth/register/start", client.backend_url()))
        .json(request);
    execute("register_start", request).await
}

/// Answer a registration challenge, creating the account and its first
/// session.
#[tracing::instrument(skip(client, request), fields(device = %request.device))]
pub async fn register_complete(
    client: &BackendClient,
    request: &RegisterCompleteRequest,
) -> Result<RegisterCompleteResponse> {
    tracing::debug!("completing registration challenge");

    let request = client
        .http()
        .post(format!("{}/auth/register/complete", client.backend_url()))
        .json(request);
    let response: RegisterCompleteResponse = execute("register_complete", request).await?;

    tracing::info!(user = %response.user.id, "registration complete");
    Ok(response)
}

/// Request a login challenge for a known public key.
pub async fn login_start(
    client: &BackendClient,
    request: &LoginStartRequest,
) -> Result<LoginStartResponse> {
    let request = client
        .http()
        .post(format!("{}/auth/login/start", client.backend_url()))
        .json(request);
    execute("login_start", request).await
}

/// Answer a login challenge, opening a new session.
#[tracing::instrument(skip(client, request), fields(device = %request.device))]
pub async fn login_complete(
    client: &BackendClient,
    request: &LoginCompleteRequest,
) -> Result<LoginCompleteResponse> {
    tracing::debug!("completing login challenge");

    let request = client
        .http()
        .post(format!("{}/auth/login/complete", client.backend_url()))
        .json(request);
    let response: LoginCompleteResponse = execute("login_complete", request).await?;

    tracing::info!(user = %response.user.id, "login complete");
    Ok(response)
}
