//! Authentication middleware
//!
//! Bearer-token guard for the protected employee routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Auth guard - requires a valid bearer token
///
/// Reads `Authorization: Bearer <token>`, validates the JWT and injects
/// [`CurrentUser`] into request extensions for downstream handlers.
///
/// # Errors (all terminal, all 401)
///
/// | Condition | Message |
/// |-----------|---------|
/// | No Authorization header | "No token, authorization denied." |
/// | Header not `Bearer <token>` | "Token format is invalid." |
/// | Signature invalid or expired | "Token is not valid." |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(header) = auth_header else {
        tracing::warn!(target: "security", event = "auth_missing", uri = %req.uri());
        return Err(AppError::NoToken);
    };

    let token = JwtService::extract_from_header(header).ok_or(AppError::InvalidTokenFormat)?;

    match state.get_jwt_service().validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(
                target: "security",
                event = "auth_failed",
                error = %e,
                uri = %req.uri()
            );
            Err(AppError::InvalidToken)
        }
    }
}
