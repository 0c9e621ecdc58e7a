//! Utility module - shared helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and result alias
//! - [`validation`] - input sanitization and field-level checks
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, FieldError};
pub use result::AppResult;
