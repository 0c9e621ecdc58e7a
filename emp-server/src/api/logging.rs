//! Request logging middleware
//!
//! Records every HTTP request with method, path, status and latency.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

pub async fn log_request(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let response = next.run(req).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        warn!(%method, %path, status = %status, latency_ms, "request failed");
    } else {
        info!(%method, %path, status = %status, latency_ms, "request");
    }

    response
}
