//! Health Check Handler

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health - liveness only, no auth
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
