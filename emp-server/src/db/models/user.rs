//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::FieldError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, is_valid_email, normalize_email,
    sanitize_text,
};

/// User ID type
pub type UserId = RecordId;

/// User account record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Id rendered as "user:key" (empty when not yet persisted)
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Signup payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated signup payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserCreate {
    pub fn validate(self) -> Result<NewUser, Vec<FieldError>> {
        let mut errors = Vec::new();

        let username = match self.username.as_deref().map(sanitize_text) {
            Some(name) if !name.is_empty() && name.len() <= MAX_NAME_LEN => name,
            _ => {
                errors.push(FieldError::new("username", "username is required."));
                String::new()
            }
        };

        let email = match self.email.as_deref().map(normalize_email) {
            Some(email) if is_valid_email(&email) => email,
            Some(_) => {
                errors.push(FieldError::new("email", "email must be a valid email address."));
                String::new()
            }
            None => {
                errors.push(FieldError::new("email", "email is required."));
                String::new()
            }
        };

        let password = match self.password {
            Some(p) if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&p.len()) => p,
            Some(_) => {
                errors.push(FieldError::new(
                    "password",
                    format!("password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters."),
                ));
                String::new()
            }
            None => {
                errors.push(FieldError::new("password", "password is required."));
                String::new()
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewUser {
            username,
            email,
            password,
        })
    }
}
