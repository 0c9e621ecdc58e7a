//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_auth;
use crate::core::ServerState;

/// Employee router - every route sits behind the bearer-token guard
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new().nest("/api/v1/emp", routes(state))
}

fn routes(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route(
            "/employees",
            get(handler::list).post(handler::create),
        )
        .route("/employees/search", get(handler::search))
        .route(
            "/employees/{eid}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn_with_state(state, require_auth))
}
