//! JWT Extractor
//!
//! Custom extractor for automatically validating JWT tokens

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Use this extractor in protected handlers to receive the authenticated
/// identity; falls back to header validation when no middleware ran.
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted (from middleware)
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let Some(header) = auth_header else {
            return Err(AppError::NoToken);
        };

        let token = JwtService::extract_from_header(header).ok_or(AppError::InvalidTokenFormat)?;

        match state.get_jwt_service().validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::from(claims);
                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());
                Ok(user)
            }
            Err(_) => Err(AppError::InvalidToken),
        }
    }
}
