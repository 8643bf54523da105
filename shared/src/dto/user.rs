//! Current-user and account management DTOs.

use serde::{Deserialize, Serialize};

use super::auth::{Session, User, UserProfile};

/// Response of `GET /users/@me`: the account plus the session backing the
/// presented bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfoResponse {
    pub user: User,
    pub session: Session,
}

/// Account edit request (`PATCH /users/{userId}`). Absent fields are left
/// untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEditRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

/// Response of `DELETE /users/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDeleteResponse {
    pub id: String,
}
