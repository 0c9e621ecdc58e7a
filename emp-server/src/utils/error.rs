//! Unified error handling
//!
//! Provides the application error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`FieldError`] - one entry in a structured validation report
//!
//! # Status code mapping
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `NoToken` / `InvalidTokenFormat` / `InvalidToken` | 401 | `{message}` |
//! | `NotFound` | 404 | `{message}` |
//! | `BadRequest` | 400 | `{message}` |
//! | `Validation` | 400 | `{errors: [{field, message}, ...]}` |
//! | `Database` / `Internal` | 500 | `"Server Error"` (detail logged) |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Name of the offending request field
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Authentication errors (401) ==========
    #[error("No token, authorization denied.")]
    NoToken,

    #[error("Token format is invalid.")]
    InvalidTokenFormat,

    #[error("Token is not valid.")]
    InvalidToken,

    // ========== Business logic errors (4xx) ==========
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<FieldError>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NoToken | AppError::InvalidTokenFormat | AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(MessageBody {
                    message: self.to_string(),
                }),
            )
                .into_response(),

            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }

            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
            }

            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }

            // Client only ever sees the generic message; detail goes to the log
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

/// A body that fails to deserialize gets the same structured 400 as any
/// other invalid input, not the extractor's plain-text 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![FieldError::new("body", rejection.body_text())])
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
