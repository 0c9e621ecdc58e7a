//! Shared helpers for the API integration tests
//!
//! Each test gets its own embedded database in a throwaway directory and
//! drives the real router through `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use emp_server::{Config, ServerState};

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _data_dir: TempDir,
}

pub async fn spawn() -> TestApp {
    let data_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = Config::with_overrides(data_dir.path().to_string_lossy(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("failed to initialize state");
    let router = emp_server::api::build_router(state.clone());
    TestApp {
        router,
        state,
        _data_dir: data_dir,
    }
}

/// A valid Authorization header value for a synthetic user
pub fn bearer(state: &ServerState) -> String {
    let token = state
        .jwt_service
        .generate_token("user:tester", "tester", "tester@example.com")
        .expect("failed to generate test token");
    format!("Bearer {token}")
}

pub fn get(uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    auth: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Run a request and return (status, body-as-json).
///
/// Non-JSON bodies (the generic 500 text) come back as a JSON string.
pub async fn send(router: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = router.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, body)
}

/// A complete, valid create-employee payload
pub fn ann() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Ann",
        "last_name": "Lee",
        "email": "ann@x.com",
        "position": "Eng",
        "department": "R&D",
        "salary": 50000,
        "date_of_joining": "2024-01-01"
    })
}
