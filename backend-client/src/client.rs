//! # Backend Facade Client
//!
//! [`BackendClient`] is the stateful entry point of the SDK: it holds the
//! backend base URL, a pooled `reqwest::Client` and the optional bearer
//! token, and delegates every operation to the matching endpoint function.
//!
//! ## Token lifecycle
//!
//! A freshly constructed client is unauthenticated. The token is installed
//! either as a side effect of a successful [`register_complete`] /
//! [`login_complete`], or explicitly via [`set_auth_token`] (e.g. when
//! restoring a persisted token). There is no logout operation; clear state
//! by passing `None` to [`set_auth_token`] or by dropping the client.
//!
//! Authenticated methods check token presence *before* any network
//! activity and fail with [`ApiError::AuthRequired`] when it is missing.
//! The check is purely local: an expired or revoked token still reaches the
//! server and fails there with [`ApiError::Status`].
//!
//! ## Concurrency
//!
//! The token lives behind a `parking_lot::RwLock` and every dispatch takes
//! an immutable snapshot of it before issuing the request, so the client is
//! `Send + Sync` and can be shared behind an `Arc`. A `set_auth_token`
//! racing an in-flight call is observed by that call only through the
//! snapshot it already took. No serialization, queuing, retries or timeouts
//! are applied by the SDK; transport policy belongs to the `reqwest::Client`
//! the caller supplies (or the default one).
//!
//! [`register_complete`]: BackendClient::register_complete
//! [`login_complete`]: BackendClient::login_complete
//! [`set_auth_token`]: BackendClient::set_auth_token
//! [`ApiError::AuthRequired`]: crate::error::ApiError::AuthRequired
//! [`ApiError::Status`]: crate::error::ApiError::Status

use parking_lot::RwLock;
use shared::dto::auth::{
    LoginCompleteRequest, LoginCompleteResponse, LoginStartRequest, LoginStartResponse,
    RegisterCompleteRequest, RegisterCompleteResponse, RegisterStartRequest,
    RegisterStartResponse, User,
};
use shared::dto::bookmarks::{
    BookmarkInput, BookmarkResponse, CreateBookmarkRequest, DeleteBookmarkResponse,
};
use shared::dto::list::{
    CreateListRequest, CreateListResponse, DeleteListResponse, GetListsResponse,
    UpdateListRequest, UpdateListResponse,
};
use shared::dto::meta::MetaResponse;
use shared::dto::metrics::MetricsProvidersRequest;
use shared::dto::progress::{
    DeleteProgressRequest, DeleteProgressResponse, ImportProgressResponse, ProgressItem,
    UpdateProgressResponse, UserProgress,
};
use shared::dto::ratings::{GetUserRatingsResponse, SetUserRatingRequest, SetUserRatingResponse};
use shared::dto::session::{
    DeleteSessionResponse, SessionResponse, UpdateSessionRequest, UserSession,
};
use shared::dto::settings::{UpdateUserSettingsRequest, UserSettings};
use shared::dto::user::{UserDeleteResponse, UserEditRequest, UserInfoResponse};

use crate::endpoints;
use crate::endpoints::metrics::MetricsMethod;
use crate::error::{ApiError, Result};

/// Base URL of the reference production deployment.
pub const DEFAULT_BACKEND_URL: &str = "https://backend.fifthwit.net";

/// Stateful facade over the backend REST API.
pub struct BackendClient {
    http: reqwest::Client,
    backend_url: String,
    auth_token: RwLock<Option<String>>,
}

impl BackendClient {
    /// Create a client pointed at [`DEFAULT_BACKEND_URL`], unauthenticated.
    pub fn new() -> Self {
        Self::with_backend_url(DEFAULT_BACKEND_URL)
    }

    /// Create a client pointed at a custom backend deployment.
    pub fn with_backend_url(backend_url: impl Into<String>) -> Self {
        Self::with_http_client(backend_url, reqwest::Client::new())
    }

    /// Create a client with a caller-configured `reqwest::Client`, for
    /// callers that want their own timeout, proxy or TLS policy. The SDK
    /// itself configures none of those.
    pub fn with_http_client(backend_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            http,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            auth_token: RwLock::new(None),
        }
    }

    /// The backend base URL this client talks to.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// The pooled HTTP client endpoint functions dispatch through.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Install or clear the bearer token. `None` returns the client to the
    /// unauthenticated state.
    pub fn set_auth_token(&self, token: Option<String>) {
        *self.auth_token.write() = token;
    }

    /// Snapshot of the currently stored bearer token.
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token.read().clone()
    }

    /// Token snapshot for an authenticated dispatch, or the precondition
    /// error when none is stored.
    fn require_auth_token(&self) -> Result<String> {
        self.auth_token().ok_or(ApiError::AuthRequired)
    }

    // ---- Unauthenticated operations ------------------------------------

    /// Fetch backend instance metadata. Requires no token.
    pub async fn meta(&self) -> Result<MetaResponse> {
        endpoints::meta::meta(self).await
    }

    /// Submit provider telemetry. Requires no token.
    pub async fn submit_provider_metrics(
        &self,
        request: &MetricsProvidersRequest,
        method: MetricsMethod,
    ) -> Result<bool> {
        endpoints::metrics::submit_provider_metrics(self, request, method).await
    }

    // ---- Auth flows ----------------------------------------------------

    /// Request a registration challenge. No state change.
    pub async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse> {
        endpoints::auth::register_start(self, request).await
    }

    /// Answer a registration challenge. On success the returned token is
    /// stored and subsequent authenticated calls use it.
    pub async fn register_complete(
        &self,
        request: &RegisterCompleteRequest,
    ) -> Result<RegisterCompleteResponse> {
        let response = endpoints::auth::register_complete(self, request).await?;
        self.set_auth_token(Some(response.token.clone()));
        Ok(response)
    }

    /// Request a login challenge. No state change.
    pub async fn login_start(&self, request: &LoginStartRequest) -> Result<LoginStartResponse> {
        endpoints::auth::login_start(self, request).await
    }

    /// Answer a login challenge. On success the returned token is stored
    /// and subsequent authenticated calls use it.
    pub async fn login_complete(
        &self,
        request: &LoginCompleteRequest,
    ) -> Result<LoginCompleteResponse> {
        let response = endpoints::auth::login_complete(self, request).await?;
        self.set_auth_token(Some(response.token.clone()));
        Ok(response)
    }

    // ---- User ----------------------------------------------------------

    /// Fetch the authenticated user and current session.
    pub async fn get_user_info(&self) -> Result<UserInfoResponse> {
        let token = self.require_auth_token()?;
        endpoints::user::get_user_info(self, &token).await
    }

    /// Edit a user's profile.
    pub async fn edit_user(&self, user_id: &str, request: &UserEditRequest) -> Result<User> {
        let token = self.require_auth_token()?;
        endpoints::user::edit_user(self, user_id, request, &token).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, user_id: &str) -> Result<UserDeleteResponse> {
        let token = self.require_auth_token()?;
        endpoints::user::delete_user(self, user_id, &token).await
    }

    // ---- Sessions ------------------------------------------------------

    /// Rename a session's device.
    pub async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<SessionResponse> {
        let token = self.require_auth_token()?;
        endpoints::session::update_session(self, session_id, request, &token).await
    }

    /// Revoke a session.
    pub async fn delete_session(&self, session_id: &str) -> Result<DeleteSessionResponse> {
        let token = self.require_auth_token()?;
        endpoints::session::delete_session(self, session_id, &token).await
    }

    /// List a user's sessions.
    pub async fn get_user_sessions(&self, user_id: &str) -> Result<Vec<UserSession>> {
        let token = self.require_auth_token()?;
        endpoints::session::get_user_sessions(self, user_id, &token).await
    }

    // ---- Bookmarks -----------------------------------------------------

    /// List a user's bookmarks.
    pub async fn get_bookmarks(&self, user_id: &str) -> Result<Vec<BookmarkResponse>> {
        let token = self.require_auth_token()?;
        endpoints::bookmarks::get_bookmarks(self, user_id, &token).await
    }

    /// Create (or overwrite) the bookmark for one title.
    pub async fn create_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &CreateBookmarkRequest,
    ) -> Result<BookmarkResponse> {
        let token = self.require_auth_token()?;
        endpoints::bookmarks::create_bookmark(self, user_id, tmdb_id, request, &token).await
    }

    /// Replace a user's bookmarks wholesale.
    pub async fn bulk_update_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[BookmarkInput],
    ) -> Result<Vec<BookmarkResponse>> {
        let token = self.require_auth_token()?;
        endpoints::bookmarks::bulk_update_bookmarks(self, user_id, bookmarks, &token).await
    }

    /// Remove the bookmark for one title.
    pub async fn delete_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
    ) -> Result<DeleteBookmarkResponse> {
        let token = self.require_auth_token()?;
        endpoints::bookmarks::delete_bookmark(self, user_id, tmdb_id, &token).await
    }

    // ---- Lists ---------------------------------------------------------

    /// Fetch all of a user's lists.
    pub async fn get_lists(&self, user_id: &str) -> Result<GetListsResponse> {
        let token = self.require_auth_token()?;
        endpoints::lists::get_lists(self, user_id, &token).await
    }

    /// Create a list.
    pub async fn create_list(
        &self,
        user_id: &str,
        request: &CreateListRequest,
    ) -> Result<CreateListResponse> {
        let token = self.require_auth_token()?;
        endpoints::lists::create_list(self, user_id, request, &token).await
    }

    /// Update a list named by `request.list_id`.
    pub async fn update_list(
        &self,
        user_id: &str,
        request: &UpdateListRequest,
    ) -> Result<UpdateListResponse> {
        let token = self.require_auth_token()?;
        endpoints::lists::update_list(self, user_id, request, &token).await
    }

    /// Delete a list.
    pub async fn delete_list(&self, user_id: &str, list_id: &str) -> Result<DeleteListResponse> {
        let token = self.require_auth_token()?;
        endpoints::lists::delete_list(self, user_id, list_id, &token).await
    }

    // ---- Progress ------------------------------------------------------

    /// List a user's progress records.
    pub async fn get_progress(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        let token = self.require_auth_token()?;
        endpoints::progress::get_progress(self, user_id, &token).await
    }

    /// Write the progress record for one title.
    pub async fn update_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &ProgressItem,
    ) -> Result<UpdateProgressResponse> {
        let token = self.require_auth_token()?;
        endpoints::progress::update_progress(self, user_id, tmdb_id, request, &token).await
    }

    /// Delete progress for one title.
    pub async fn delete_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &DeleteProgressRequest,
    ) -> Result<DeleteProgressResponse> {
        let token = self.require_auth_token()?;
        endpoints::progress::delete_progress(self, user_id, tmdb_id, request, &token).await
    }

    /// Import a batch of progress records.
    pub async fn import_progress(
        &self,
        user_id: &str,
        items: &[ProgressItem],
    ) -> Result<ImportProgressResponse> {
        let token = self.require_auth_token()?;
        endpoints::progress::import_progress(self, user_id, items, &token).await
    }

    // ---- Ratings -------------------------------------------------------

    /// Fetch all of a user's ratings.
    pub async fn get_ratings(&self, user_id: &str) -> Result<GetUserRatingsResponse> {
        let token = self.require_auth_token()?;
        endpoints::ratings::get_ratings(self, user_id, &token).await
    }

    /// Upsert the rating for one title.
    pub async fn set_rating(
        &self,
        user_id: &str,
        request: &SetUserRatingRequest,
    ) -> Result<SetUserRatingResponse> {
        let token = self.require_auth_token()?;
        endpoints::ratings::set_rating(self, user_id, request, &token).await
    }

    // ---- Settings ------------------------------------------------------

    /// Fetch a user's application settings.
    pub async fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        let token = self.require_auth_token()?;
        endpoints::settings::get_settings(self, user_id, &token).await
    }

    /// Write a user's application settings.
    pub async fn update_settings(
        &self,
        user_id: &str,
        request: &UpdateUserSettingsRequest,
    ) -> Result<UserSettings> {
        let token = self.require_auth_token()?;
        endpoints::settings::update_settings(self, user_id, request, &token).await
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

// Token is a credential, keep it out of debug output.
impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("backend_url", &self.backend_url)
            .field("authenticated", &self.auth_token.read().is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_client_starts_unauthenticated_at_production_url() {
        let client = BackendClient::new();
        assert_eq!(client.backend_url(), DEFAULT_BACKEND_URL);
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn backend_url_is_normalized() {
        let client = BackendClient::with_backend_url("https://example.test/");
        assert_eq!(client.backend_url(), "https://example.test");
    }

    #[test]
    fn set_auth_token_installs_and_clears() {
        let client = BackendClient::new();
        client.set_auth_token(Some("tok".to_string()));
        assert_eq!(client.auth_token().as_deref(), Some("tok"));
        client.set_auth_token(None);
        assert!(client.auth_token().is_none());
    }

    #[test]
    fn debug_output_does_not_leak_token() {
        let client = BackendClient::new();
        client.set_auth_token(Some("super-secret".to_string()));
        let debug = format!("{client:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("authenticated: true"));
    }
}
