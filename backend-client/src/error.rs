//! # SDK Error Types
//!
//! The SDK surfaces exactly two failure families:
//!
//! - **Precondition failures**: [`ApiError::AuthRequired`] is raised before
//!   any network activity when an authenticated operation is attempted on a
//!   client holding no token.
//! - **Transport/status failures**: [`ApiError::Status`] for non-2xx
//!   responses (the server's error body is not parsed, and 4xx is not
//!   distinguished from 5xx), [`ApiError::Transport`] for network and JSON
//!   decode failures.
//!
//! No retry, suppression or internal recovery happens anywhere; every error
//! propagates to the caller of the failing method.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for every SDK operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An authenticated operation was attempted without a stored token.
    /// Raised locally; no request is sent. Note that the inverse does not
    /// hold: a stored token is never validated client-side, so an expired
    /// or revoked token still reaches the server and comes back as
    /// [`ApiError::Status`].
    #[error("authentication required: complete a login or registration, or install a token with set_auth_token()")]
    AuthRequired,

    /// The server answered with a non-2xx status.
    #[error("{operation} failed with status {status}")]
    Status {
        operation: &'static str,
        status: StatusCode,
    },

    /// The request never completed, or the 2xx body failed to decode into
    /// the declared response type.
    #[error("{operation} transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status of a [`ApiError::Status`] failure, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
