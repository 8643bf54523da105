//! Challenge/response flow and token lifecycle tests.

mod support;

use axum::http::StatusCode;
use backend_client::dto::auth::{
    ChallengeSubmission, LoginCompleteRequest, LoginStartRequest, RegisterCompleteRequest,
    RegisterStartRequest, UserProfile,
};
use serde_json::json;
use support::*;

fn sample_profile() -> UserProfile {
    UserProfile {
        color_a: "#2E65CF".to_string(),
        color_b: "#2E65CF".to_string(),
        icon: "bookmark".to_string(),
    }
}

#[tokio::test]
async fn register_start_posts_empty_body_and_returns_challenge() {
    // Arrange
    let mock = MockBackend::ok(json!({ "challenge": "abc" })).await;
    let client = mock.client();

    // Act
    let response = client
        .register_start(&RegisterStartRequest::default())
        .await
        .unwrap();

    // Assert
    assert_eq!(response.challenge, "abc");
    let request = mock.only_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/auth/register/start");
    assert_eq!(request.body, Some(json!({})));
    assert_eq!(request.auth, None);
}

#[tokio::test]
async fn register_complete_stores_token_for_subsequent_calls() {
    // Arrange
    let mock = MockBackend::ok(auth_complete_json("T")).await;
    let client = mock.client();
    assert!(client.auth_token().is_none());

    // Act
    let response = client
        .register_complete(&RegisterCompleteRequest {
            public_key: "pk".to_string(),
            challenge: ChallengeSubmission {
                code: "abc".to_string(),
                signature: "sig".to_string(),
            },
            namespace: "pstream".to_string(),
            device: "laptop".to_string(),
            profile: sample_profile(),
        })
        .await
        .unwrap();

    // Assert: token captured on the client, used by the next call.
    assert_eq!(response.token, "T");
    assert_eq!(client.auth_token().as_deref(), Some("T"));

    client.get_user_info().await.unwrap();
    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].path, "/auth/register/complete");
    assert_eq!(requests[0].auth, None);
    assert_eq!(requests[1].auth.as_deref(), Some("Bearer T"));
}

#[tokio::test]
async fn login_start_leaves_client_unauthenticated() {
    // Arrange
    let mock = MockBackend::ok(json!({ "challenge": "xyz" })).await;
    let client = mock.client();

    // Act
    let response = client
        .login_start(&LoginStartRequest {
            public_key: "pk".to_string(),
        })
        .await
        .unwrap();

    // Assert
    assert_eq!(response.challenge, "xyz");
    assert!(client.auth_token().is_none());
    let request = mock.only_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/auth/login/start");
    assert_eq!(request.body, Some(json!({ "publicKey": "pk" })));
}

#[tokio::test]
async fn login_complete_then_user_info_sends_fresh_bearer() {
    // Arrange
    let mock = MockBackend::ok(auth_complete_json("tok1")).await;
    let client = mock.client();

    // Act
    let response = client
        .login_complete(&LoginCompleteRequest {
            public_key: "pk".to_string(),
            challenge: ChallengeSubmission {
                code: "c".to_string(),
                signature: "s".to_string(),
            },
            device: "d".to_string(),
        })
        .await
        .unwrap();
    let info = client.get_user_info().await.unwrap();

    // Assert
    assert_eq!(response.token, "tok1");
    assert_eq!(info.user.id, "u1");
    assert_eq!(info.session.id, "s1");

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/auth/login/complete");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "publicKey": "pk",
            "challenge": { "code": "c", "signature": "s" },
            "device": "d"
        }))
    );
    assert_eq!(requests[1].method, "GET");
    assert_eq!(requests[1].path, "/users/@me");
    assert_eq!(requests[1].auth.as_deref(), Some("Bearer tok1"));
}

#[tokio::test]
async fn externally_installed_token_is_attached_verbatim() {
    // Arrange
    let mock = MockBackend::ok(user_info_json()).await;
    let client = mock.client();
    client.set_auth_token(Some("X".to_string()));

    // Act
    client.get_user_info().await.unwrap();

    // Assert
    assert_eq!(mock.only_request().auth.as_deref(), Some("Bearer X"));
}

#[tokio::test]
async fn clearing_token_returns_client_to_unauthenticated() {
    // Arrange
    let mock = MockBackend::start(StatusCode::OK, user_info_json()).await;
    let client = mock.authed_client("tok");

    // Act
    client.set_auth_token(None);
    let err = client.get_user_info().await.unwrap_err();

    // Assert: precondition failure, nothing on the wire.
    assert!(matches!(err, backend_client::ApiError::AuthRequired));
    assert_eq!(mock.hits(), 0);
}
