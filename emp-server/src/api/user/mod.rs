//! User API Module
//!
//! Public routes - these issue the credentials the employee routes require.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/v1/user/signup", post(handler::signup))
        .route("/api/v1/user/login", post(handler::login))
}
