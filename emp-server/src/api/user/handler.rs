//! User API Handlers
//!
//! Credential issuance: signup creates an account, login verifies one;
//! both return a signed bearer token.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::{LoginRequest, User, UserCreate};
use crate::db::repository::{RepoError, UserRepository};
use crate::utils::validation::normalize_email;
use crate::utils::{AppError, AppResult, FieldError};

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// POST /api/v1/user/signup
pub async fn signup(
    State(state): State<ServerState>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    let Json(payload) = payload?;
    let data = payload.validate().map_err(AppError::validation)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo.create(data).await.map_err(|e| match e {
        RepoError::Duplicate(_) => AppError::bad_request("User already exists."),
        e => AppError::from(e),
    })?;

    let token = issue_token(&state, &user)?;

    tracing::info!(username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully.".to_string(),
            token,
            user: UserInfo::from(&user),
        }),
    ))
}

/// POST /api/v1/user/login
///
/// Unknown email and wrong password produce the same response, so the
/// endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let mut errors = Vec::new();
    if payload.email.as_deref().map(str::trim).unwrap_or("").is_empty() {
        errors.push(FieldError::new("email", "email is required."));
    }
    if payload.password.as_deref().unwrap_or("").is_empty() {
        errors.push(FieldError::new("password", "password is required."));
    }
    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }

    let email = normalize_email(payload.email.as_deref().unwrap_or(""));
    let password = payload.password.as_deref().unwrap_or("");

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid credentials."))?;

    let password_valid = user
        .verify_password(password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

    if !password_valid {
        tracing::warn!(target: "security", event = "login_failed", email = %email);
        return Err(AppError::bad_request("Invalid credentials."));
    }

    let token = issue_token(&state, &user)?;

    tracing::info!(username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo::from(&user),
    }))
}

fn issue_token(state: &ServerState, user: &User) -> Result<String, AppError> {
    state
        .get_jwt_service()
        .generate_token(&user.id_string(), &user.username, &user.email)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))
}
