//! # Backend Endpoint Functions
//!
//! One pure async function per REST operation, grouped by API domain.
//! Every function issues exactly one HTTP request against the backend and
//! either returns the decoded JSON body or fails fast. No retries or
//! backoff anywhere, and server error bodies are never parsed.
//!
//! ## Module Structure
//!
//! ```text
//! endpoints/
//! ├── mod.rs       - request helper shared by all endpoint functions
//! ├── meta.rs      - instance metadata (unauthenticated)
//! ├── auth.rs      - challenge/response registration and login
//! ├── user.rs      - current user, profile edit, account deletion
//! ├── session.rs   - device session management
//! ├── bookmarks.rs - bookmark CRUD and bulk replace
//! ├── progress.rs  - watch-progress writes, reads, deletes and import
//! ├── lists.rs     - user list CRUD
//! ├── ratings.rs   - rating reads and upserts
//! ├── settings.rs  - account settings
//! └── metrics.rs   - provider telemetry (unauthenticated)
//! ```
//!
//! Functions taking a `token` argument attach it as
//! `Authorization: Bearer <token>`; the facade is responsible for deciding
//! where that token comes from.

pub mod auth;
pub mod bookmarks;
pub mod lists;
pub mod meta;
pub mod metrics;
pub mod progress;
pub mod ratings;
pub mod session;
pub mod settings;
pub mod user;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Dispatch a prepared request and decode the 2xx JSON body.
///
/// The single status check and decode step shared by every endpoint
/// function: non-2xx maps to [`ApiError::Status`] carrying `operation` and
/// the numeric status, send/decode failures map to [`ApiError::Transport`].
pub(crate) async fn execute<T: DeserializeOwned>(
    operation: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::Transport { operation, source })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(operation, status = status.as_u16(), "backend returned error status");
        return Err(ApiError::Status { operation, status });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| ApiError::Transport { operation, source })
}

/// `Authorization` header value for a bearer token.
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
