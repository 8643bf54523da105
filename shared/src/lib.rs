//! # Shared Data Transfer Objects Library
//!
//! This library defines the JSON contract between SDK consumers and the
//! P-Stream backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Challenge/response registration and login DTOs
//!   - **[`dto::user`]**: Current-user, profile edit and account deletion DTOs
//!   - **[`dto::progress`]**: Watch-progress tracking DTOs
//!   - plus sessions, bookmarks, lists, ratings, settings and metrics
//!
//! ## Wire Format
//!
//! The backend is not uniform about field casing, and these types reproduce
//! its choices exactly rather than normalizing them:
//!
//! - Most records use **camelCase** on the wire (`tmdbId`, `publicKey`,
//!   `createdAt`), mapped from snake_case Rust fields via
//!   `#[serde(rename_all = "camelCase")]`
//! - List and rating records use **snake_case** (`tmdb_id`, `list_id`),
//!   the default serde behavior
//! - Optional request fields are omitted from JSON when `None` (using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - Timestamps the server emits as ISO-8601 strings deserialize into
//!   `chrono::DateTime<Utc>`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginStartRequest;
//!
//! let request = LoginStartRequest {
//!     public_key: "ed25519 public key".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"publicKey":"ed25519 public key"}"#);
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
