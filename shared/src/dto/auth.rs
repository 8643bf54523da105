//! Challenge/response authentication DTOs.
//!
//! Both registration and login are two-step handshakes: a `*_start` call
//! yields an opaque challenge, and the matching `*_complete` call answers it
//! with a [`ChallengeSubmission`] signed by the account keypair. A successful
//! completion returns the [`User`], the new [`Session`] and a bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration start request. The captcha token is only required when the
/// backend's `/meta` reports `hasCaptcha: true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStartRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_token: Option<String>,
}

/// Registration start response carrying the challenge to sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterStartResponse {
    pub challenge: String,
}

/// Signed answer to a server-issued challenge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChallengeSubmission {
    pub code: String,
    pub signature: String,
}

/// Cosmetic profile attached to an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub color_a: String,
    pub color_b: String,
    pub icon: String,
}

/// Registration complete request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompleteRequest {
    pub public_key: String,
    pub challenge: ChallengeSubmission,
    pub namespace: String,
    pub device: String,
    pub profile: UserProfile,
}

/// Registration complete response (account created, session opened).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterCompleteResponse {
    pub user: User,
    pub session: Session,
    pub token: String,
}

/// Login start request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginStartRequest {
    pub public_key: String,
}

/// Login start response carrying the challenge to sign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginStartResponse {
    pub challenge: String,
}

/// Login complete request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginCompleteRequest {
    pub public_key: String,
    pub challenge: ChallengeSubmission,
    pub device: String,
}

/// Login complete response (session opened).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCompleteResponse {
    pub user: User,
    pub session: Session,
    pub token: String,
}

/// Account record as the backend reports it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub public_key: String,
    pub namespace: String,
    pub profile: UserProfile,
    pub permissions: Vec<String>,
}

/// Device session record returned by the auth endpoints. The `user` field is
/// the owning user's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user: String,
    pub created_at: DateTime<Utc>,
    pub accessed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub device: String,
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_complete_request_serializes_camel_case() {
        let request = RegisterCompleteRequest {
            public_key: "pk".to_string(),
            challenge: ChallengeSubmission {
                code: "c".to_string(),
                signature: "s".to_string(),
            },
            namespace: "pstream".to_string(),
            device: "laptop".to_string(),
            profile: UserProfile {
                color_a: "#2E65CF".to_string(),
                color_b: "#2E65CF".to_string(),
                icon: "bookmark".to_string(),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["publicKey"], "pk");
        assert_eq!(value["challenge"]["code"], "c");
        assert_eq!(value["challenge"]["signature"], "s");
        assert_eq!(value["profile"]["colorA"], "#2E65CF");
        // No snake_case leakage on the wire
        assert!(value.get("public_key").is_none());
    }

    #[test]
    fn register_start_request_omits_absent_captcha_token() {
        let body = serde_json::to_string(&RegisterStartRequest::default()).unwrap();
        assert_eq!(body, "{}");

        let body = serde_json::to_string(&RegisterStartRequest {
            captcha_token: Some("tok".to_string()),
        })
        .unwrap();
        assert_eq!(body, r#"{"captchaToken":"tok"}"#);
    }

    #[test]
    fn login_complete_response_deserializes() {
        let json = r##"{
            "user": {
                "id": "u1",
                "publicKey": "pk",
                "namespace": "pstream",
                "profile": { "colorA": "#fff", "colorB": "#000", "icon": "tv" },
                "permissions": ["sessions.manage"]
            },
            "session": {
                "id": "s1",
                "user": "u1",
                "createdAt": "2024-01-01T00:00:00.000Z",
                "accessedAt": "2024-01-02T00:00:00.000Z",
                "expiresAt": "2024-02-01T00:00:00.000Z",
                "device": "laptop",
                "userAgent": "pstream-sdk"
            },
            "token": "tok1"
        }"##;

        let response: LoginCompleteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "tok1");
        assert_eq!(response.user.permissions, vec!["sessions.manage"]);
        assert_eq!(response.session.user, "u1");
        assert!(response.session.expires_at > response.session.created_at);
    }
}
