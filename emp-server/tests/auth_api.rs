//! Bearer-token guard integration tests

mod common;

use axum::http::StatusCode;
use common::{get, send, spawn};
use emp_server::JwtService;
use emp_server::auth::JwtConfig;

const EMPLOYEES: &str = "/api/v1/emp/employees";

#[tokio::test]
async fn missing_header_is_rejected() {
    let app = spawn().await;
    let (status, body) = send(&app.router, get(EMPLOYEES, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No token, authorization denied.");
}

#[tokio::test]
async fn malformed_scheme_is_rejected() {
    let app = spawn().await;

    for header in ["Token abc.def.ghi", "Bearer", "Bearer ", "abc.def.ghi"] {
        let (status, body) = send(&app.router, get(EMPLOYEES, Some(header))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header {header:?}");
        assert_eq!(body["message"], "Token format is invalid.");
    }
}

#[tokio::test]
async fn garbled_token_is_rejected() {
    let app = spawn().await;
    let (status, body) = send(&app.router, get(EMPLOYEES, Some("Bearer not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is not valid.");
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let app = spawn().await;

    // same secret, but already past its expiry
    let expired_issuer = JwtService::with_config(JwtConfig {
        secret: app.state.config.jwt.secret.clone(),
        expiration_days: -1,
    });
    let token = expired_issuer
        .generate_token("user:tester", "tester", "tester@example.com")
        .unwrap();

    let (status, body) = send(
        &app.router,
        get(EMPLOYEES, Some(&format!("Bearer {token}"))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is not valid.");
}

#[tokio::test]
async fn token_signed_with_wrong_secret_is_rejected() {
    let app = spawn().await;

    let foreign_issuer = JwtService::with_config(JwtConfig {
        secret: "some-other-32-byte-signing-secret!!!".to_string(),
        expiration_days: 5,
    });
    let token = foreign_issuer
        .generate_token("user:tester", "tester", "tester@example.com")
        .unwrap();

    let (status, body) = send(
        &app.router,
        get(EMPLOYEES, Some(&format!("Bearer {token}"))),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is not valid.");
}

#[tokio::test]
async fn valid_token_passes_the_guard() {
    let app = spawn().await;
    let auth = common::bearer(&app.state);

    // the collection is empty, so the handler answers 404 - the point is
    // that the guard let the request through
    let (status, body) = send(&app.router, get(EMPLOYEES, Some(&auth))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No employees found.");
}

#[tokio::test]
async fn health_is_public() {
    let app = spawn().await;
    let (status, body) = send(&app.router, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
