//! # Service Trait
//!
//! [`BackendService`] abstracts the full facade surface behind a trait so
//! applications can inject a mock implementation in tests instead of
//! standing up a real backend.

use async_trait::async_trait;
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

use crate::client::BackendClient;
use crate::endpoints::metrics::MetricsMethod;
use crate::error::Result;

/// Trait covering every backend operation, implemented by [`BackendClient`].
///
/// Methods tagged "requires a stored token" fail with
/// [`ApiError::AuthRequired`](crate::error::ApiError::AuthRequired) before
/// any network call when the implementation holds no token.
#[async_trait]
pub trait BackendService: Send + Sync {
    /// Fetch backend instance metadata. No token required.
    async fn meta(&self) -> Result<MetaResponse>;

    /// Submit provider telemetry. No token required.
    async fn submit_provider_metrics(
        &self,
        request: &MetricsProvidersRequest,
        method: MetricsMethod,
    ) -> Result<bool>;

    /// Request a registration challenge.
    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse>;

    /// Answer a registration challenge; implementations store the returned
    /// token.
    async fn register_complete(
        &self,
        request: &RegisterCompleteRequest,
    ) -> Result<RegisterCompleteResponse>;

    /// Request a login challenge.
    async fn login_start(&self, request: &LoginStartRequest) -> Result<LoginStartResponse>;

    /// Answer a login challenge; implementations store the returned token.
    async fn login_complete(
        &self,
        request: &LoginCompleteRequest,
    ) -> Result<LoginCompleteResponse>;

    /// Fetch the authenticated user and current session. Requires a stored
    /// token.
    async fn get_user_info(&self) -> Result<UserInfoResponse>;

    /// Edit a user's profile. Requires a stored token.
    async fn edit_user(&self, user_id: &str, request: &UserEditRequest) -> Result<User>;

    /// Delete a user account. Requires a stored token.
    async fn delete_user(&self, user_id: &str) -> Result<UserDeleteResponse>;

    /// Rename a session's device. Requires a stored token.
    async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<SessionResponse>;

    /// Revoke a session. Requires a stored token.
    async fn delete_session(&self, session_id: &str) -> Result<DeleteSessionResponse>;

    /// List a user's sessions. Requires a stored token.
    async fn get_user_sessions(&self, user_id: &str) -> Result<Vec<UserSession>>;

    /// List a user's bookmarks. Requires a stored token.
    async fn get_bookmarks(&self, user_id: &str) -> Result<Vec<BookmarkResponse>>;

    /// Create the bookmark for one title. Requires a stored token.
    async fn create_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &CreateBookmarkRequest,
    ) -> Result<BookmarkResponse>;

    /// Replace a user's bookmarks wholesale. Requires a stored token.
    async fn bulk_update_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[BookmarkInput],
    ) -> Result<Vec<BookmarkResponse>>;

    /// Remove the bookmark for one title. Requires a stored token.
    async fn delete_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
    ) -> Result<DeleteBookmarkResponse>;

    /// Fetch all of a user's lists. Requires a stored token.
    async fn get_lists(&self, user_id: &str) -> Result<GetListsResponse>;

    /// Create a list. Requires a stored token.
    async fn create_list(
        &self,
        user_id: &str,
        request: &CreateListRequest,
    ) -> Result<CreateListResponse>;

    /// Update a list. Requires a stored token.
    async fn update_list(
        &self,
        user_id: &str,
        request: &UpdateListRequest,
    ) -> Result<UpdateListResponse>;

    /// Delete a list. Requires a stored token.
    async fn delete_list(&self, user_id: &str, list_id: &str) -> Result<DeleteListResponse>;

    /// List a user's progress records. Requires a stored token.
    async fn get_progress(&self, user_id: &str) -> Result<Vec<UserProgress>>;

    /// Write the progress record for one title. Requires a stored token.
    async fn update_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &ProgressItem,
    ) -> Result<UpdateProgressResponse>;

    /// Delete progress for one title. Requires a stored token.
    async fn delete_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &DeleteProgressRequest,
    ) -> Result<DeleteProgressResponse>;

    /// Import a batch of progress records. Requires a stored token.
    async fn import_progress(
        &self,
        user_id: &str,
        items: &[ProgressItem],
    ) -> Result<ImportProgressResponse>;

    /// Fetch all of a user's ratings. Requires a stored token.
    async fn get_ratings(&self, user_id: &str) -> Result<GetUserRatingsResponse>;

    /// Upsert the rating for one title. Requires a stored token.
    async fn set_rating(
        &self,
        user_id: &str,
        request: &SetUserRatingRequest,
    ) -> Result<SetUserRatingResponse>;

    /// Fetch a user's application settings. Requires a stored token.
    async fn get_settings(&self, user_id: &str) -> Result<UserSettings>;

    /// Write a user's application settings. Requires a stored token.
    async fn update_settings(
        &self,
        user_id: &str,
        request: &UpdateUserSettingsRequest,
    ) -> Result<UserSettings>;
}

#[async_trait]
impl BackendService for BackendClient {
    async fn meta(&self) -> Result<MetaResponse> {
        BackendClient::meta(self).await
    }

    async fn submit_provider_metrics(
        &self,
        request: &MetricsProvidersRequest,
        method: MetricsMethod,
    ) -> Result<bool> {
        BackendClient::submit_provider_metrics(self, request, method).await
    }

    async fn register_start(
        &self,
        request: &RegisterStartRequest,
    ) -> Result<RegisterStartResponse> {
        BackendClient::register_start(self, request).await
    }

    async fn register_complete(
        &self,
        request: &RegisterCompleteRequest,
    ) -> Result<RegisterCompleteResponse> {
        BackendClient::register_complete(self, request).await
    }

    async fn login_start(&self, request: &LoginStartRequest) -> Result<LoginStartResponse> {
        BackendClient::login_start(self, request).await
    }

    async fn login_complete(
        &self,
        request: &LoginCompleteRequest,
    ) -> Result<LoginCompleteResponse> {
        BackendClient::login_complete(self, request).await
    }

    async fn get_user_info(&self) -> Result<UserInfoResponse> {
        BackendClient::get_user_info(self).await
    }

    async fn edit_user(&self, user_id: &str, request: &UserEditRequest) -> Result<User> {
        BackendClient::edit_user(self, user_id, request).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<UserDeleteResponse> {
        BackendClient::delete_user(self, user_id).await
    }

    async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<SessionResponse> {
        BackendClient::update_session(self, session_id, request).await
    }

    async fn delete_session(&self, session_id: &str) -> Result<DeleteSessionResponse> {
        BackendClient::delete_session(self, session_id).await
    }

    async fn get_user_sessions(&self, user_id: &str) -> Result<Vec<UserSession>> {
        BackendClient::get_user_sessions(self, user_id).await
    }

    async fn get_bookmarks(&self, user_id: &str) -> Result<Vec<BookmarkResponse>> {
        BackendClient::get_bookmarks(self, user_id).await
    }

    async fn create_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &CreateBookmarkRequest,
    ) -> Result<BookmarkResponse> {
        BackendClient::create_bookmark(self, user_id, tmdb_id, request).await
    }

    async fn bulk_update_bookmarks(
        &self,
        user_id: &str,
        bookmarks: &[BookmarkInput],
    ) -> Result<Vec<BookmarkResponse>> {
        BackendClient::bulk_update_bookmarks(self, user_id, bookmarks).await
    }

    async fn delete_bookmark(
        &self,
        user_id: &str,
        tmdb_id: &str,
    ) -> Result<DeleteBookmarkResponse> {
        BackendClient::delete_bookmark(self, user_id, tmdb_id).await
    }

    async fn get_lists(&self, user_id: &str) -> Result<GetListsResponse> {
        BackendClient::get_lists(self, user_id).await
    }

    async fn create_list(
        &self,
        user_id: &str,
        request: &CreateListRequest,
    ) -> Result<CreateListResponse> {
        BackendClient::create_list(self, user_id, request).await
    }

    async fn update_list(
        &self,
        user_id: &str,
        request: &UpdateListRequest,
    ) -> Result<UpdateListResponse> {
        BackendClient::update_list(self, user_id, request).await
    }

    async fn delete_list(&self, user_id: &str, list_id: &str) -> Result<DeleteListResponse> {
        BackendClient::delete_list(self, user_id, list_id).await
    }

    async fn get_progress(&self, user_id: &str) -> Result<Vec<UserProgress>> {
        BackendClient::get_progress(self, user_id).await
    }

    async fn update_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &ProgressItem,
    ) -> Result<UpdateProgressResponse> {
        BackendClient::update_progress(self, user_id, tmdb_id, request).await
    }

    async fn delete_progress(
        &self,
        user_id: &str,
        tmdb_id: &str,
        request: &DeleteProgressRequest,
    ) -> Result<DeleteProgressResponse> {
        BackendClient::delete_progress(self, user_id, tmdb_id, request).await
    }

    async fn import_progress(
        &self,
        user_id: &str,
        items: &[ProgressItem],
    ) -> Result<ImportProgressResponse> {
        BackendClient::import_progress(self, user_id, items).await
    }

    async fn get_ratings(&self, user_id: &str) -> Result<GetUserRatingsResponse> {
        BackendClient::get_ratings(self, user_id).await
    }

    async fn set_rating(
        &self,
        user_id: &str,
        request: &SetUserRatingRequest,
    ) -> Result<SetUserRatingResponse> {
        BackendClient::set_rating(self, user_id, request).await
    }

    async fn get_settings(&self, user_id: &str) -> Result<UserSettings> {
        BackendClient::get_settings(self, user_id).await
    }

    async fn update_settings(
        &self,
        user_id: &str,
        request: &UpdateUserSettingsRequest,
    ) -> Result<UserSettings> {
        BackendClient::update_settings(self, user_id, request).await
    }
}
