//! API routing
//!
//! # Structure
//!
//! - [`user`] - credential issuance (signup/login), public
//! - [`employees`] - employee CRUD and search, bearer-token protected
//! - [`health`] - liveness check, public

pub mod employees;
pub mod health;
pub mod logging;
pub mod user;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// Assemble the full application router.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(user::router())
        .merge(health::router())
        .merge(employees::router(state.clone()))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging::log_request))
        .with_state(state)
}
