//! # P-Stream Backend Client
//!
//! Typed async SDK for the P-Stream media backend REST API: challenge/
//! response registration and login, session management, user profile and
//! settings, watch-progress tracking, ratings, bookmarks, lists and
//! provider-metrics submission. Every method maps to exactly one HTTP
//! request with JSON bodies both ways.
//!
//! ## Layers
//!
//! - [`endpoints`] - one pure async function per REST operation
//! - [`client::BackendClient`] - stateful facade holding the base URL and
//!   the bearer token, delegating to the endpoint functions
//! - [`service::BackendService`] - trait over the facade surface for
//!   dependency injection and mocking
//!
//! ## Example
//!
//! ```rust,no_run
//! use backend_client::BackendClient;
//! use backend_client::dto::auth::{ChallengeSubmission, LoginCompleteRequest, LoginStartRequest};
//!
//! # async fn run() -> backend_client::Result<()> {
//! let client = BackendClient::new();
//!
//! let start = client
//!     .login_start(&LoginStartRequest { public_key: "pk".into() })
//!     .await?;
//!
//! // Sign `start.challenge` with the account keypair, then:
//! client
//!     .login_complete(&LoginCompleteRequest {
//!         public_key: "pk".into(),
//!         challenge: ChallengeSubmission {
//!             code: start.challenge,
//!             signature: "base64 signature".into(),
//!         },
//!         device: "living room tv".into(),
//!     })
//!     .await?;
//!
//! // The token from the completed login is now attached automatically.
//! let info = client.get_user_info().await?;
//! println!("logged in as {}", info.user.id);
//! # Ok(())
//! # }
//! ```
//!
//! The SDK performs no retries, applies no timeouts and parses no server
//! error bodies; see [`error::ApiError`] for the two failure families.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod service;

// The wire contract lives in the `shared` crate; re-export it so consumers
// need only one dependency.
pub use shared::dto;

pub use client::{BackendClient, DEFAULT_BACKEND_URL};
pub use endpoints::metrics::MetricsMethod;
pub use error::{ApiError, Result};
pub use service::BackendService;
