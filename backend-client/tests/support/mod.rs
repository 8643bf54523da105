//! Test support: an in-process mock backend.
//!
//! Binds an axum server to a random localhost port. Every route answers with
//! one canned status/body pair and records what arrived (method, path,
//! `Authorization` header, JSON body) so tests can assert both what the SDK
//! put on the wire and how many requests it made.

// Each test binary compiles its own copy; not all of them use every helper.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use backend_client::BackendClient;
use serde_json::{json, Value};

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub auth: Option<String>,
    pub body: Option<Value>,
}

struct MockState {
    status: StatusCode,
    body: Value,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    /// Start a mock backend answering every request with `status`/`body`.
    pub async fn start(status: StatusCode, body: Value) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener addr");

        let state = Arc::new(MockState {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(record).with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server");
        });

        Self { addr, state }
    }

    /// Shorthand for a 200 mock.
    pub async fn ok(body: Value) -> Self {
        Self::start(StatusCode::OK, body).await
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// An unauthenticated client pointed at this mock.
    pub fn client(&self) -> BackendClient {
        BackendClient::with_backend_url(self.url())
    }

    /// A client pointed at this mock with a token already installed.
    pub fn authed_client(&self, token: &str) -> BackendClient {
        let client = self.client();
        client.set_auth_token(Some(token.to_string()));
        client
    }

    /// Number of requests that reached the server.
    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The single recorded request; panics unless exactly one arrived.
    pub fn only_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        auth,
        body,
    });

    (state.status, Json(state.body.clone()))
}

// ---- Canned response bodies -------------------------------------------

pub fn user_json() -> Value {
    json!({
        "id": "u1",
        "publicKey": "pk",
        "namespace": "pstream",
        "profile": { "colorA": "#2E65CF", "colorB": "#2E65CF", "icon": "bookmark" },
        "permissions": []
    })
}

pub fn session_json() -> Value {
    json!({
        "id": "s1",
        "user": "u1",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "accessedAt": "2024-01-02T00:00:00.000Z",
        "expiresAt": "2024-02-01T00:00:00.000Z",
        "device": "laptop",
        "userAgent": "pstream-sdk"
    })
}

pub fn user_info_json() -> Value {
    json!({ "user": user_json(), "session": session_json() })
}

pub fn auth_complete_json(token: &str) -> Value {
    json!({ "user": user_json(), "session": session_json(), "token": token })
}

pub fn bookmark_json(tmdb_id: &str) -> Value {
    json!({
        "tmdbId": tmdb_id,
        "meta": { "title": "Heat", "year": 1995, "type": "movie" },
        "updatedAt": "2024-03-01T12:00:00.000Z"
    })
}

pub fn list_json() -> Value {
    json!({
        "id": "l1",
        "user_id": "u1",
        "name": "Watch later",
        "description": null,
        "list_items": [ { "id": "li1", "list_id": "l1", "tmdb_id": "603" } ]
    })
}

pub fn user_progress_json(tmdb_id: &str) -> Value {
    json!({
        "id": "p1",
        "tmdbId": tmdb_id,
        "episode": { "id": null, "number": null },
        "season": { "id": null, "number": null },
        "meta": { "title": "The Matrix", "year": 1999, "type": "movie" },
        "duration": "8160000",
        "watched": "4000000",
        "updatedAt": "2024-03-01T12:00:00.000Z"
    })
}

pub fn settings_json() -> Value {
    json!({
        "id": "u1",
        "applicationTheme": "dark",
        "applicationLanguage": "en",
        "defaultSubtitleLanguage": null,
        "proxyUrls": null,
        "traktKey": null,
        "febboxKey": null
    })
}
