//! JWT token service
//!
//! Issues and validates the signed, time-limited bearer credentials.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Development fallback secret; matches the original deployment default
const DEV_SECRET: &str = "my-32-character-ultra-secure-and-ultra-long-secret";

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 signing secret (should be at least 32 bytes)
    pub secret: String,
    /// Token lifetime in days
    pub expiration_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development default");
            DEV_SECRET.to_string()
        });

        Self {
            secret,
            expiration_days: std::env::var("JWT_EXPIRATION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

/// Claims embedded in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Email
    pub email: String,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a service with the default (env-driven) configuration
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// Create a service with an explicit configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a token embedding the user identity
    pub fn generate_token(
        &self,
        user_id: &str,
        username: &str,
        email: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.config.expiration_days);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value.
    ///
    /// None for anything that is not "Bearer <non-empty token>".
    pub fn extract_from_header(header: &str) -> Option<&str> {
        match header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Some(token),
            _ => None,
        }
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user context (decoded from JWT claims)
///
/// Created by the auth middleware and injected into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            email: claims.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-that-is-long-enough!!".to_string(),
            expiration_days: 5,
        })
    }

    #[test]
    fn generate_and_validate_round_trip() {
        let service = test_service();
        let token = service
            .generate_token("user:123", "ann", "ann@x.com")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "user:123");
        assert_eq!(claims.username, "ann");
        assert_eq!(claims.email, "ann@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-that-is-long-enough!!".to_string(),
            expiration_days: -1,
        });
        let token = service.generate_token("user:123", "ann", "ann@x.com").unwrap();

        match service.validate_token(&token) {
            Err(JwtError::ExpiredToken) => {}
            other => panic!("expected ExpiredToken, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = test_service()
            .generate_token("user:123", "ann", "ann@x.com")
            .unwrap();

        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-32-byte-secret!".to_string(),
            expiration_days: 5,
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn header_extraction() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Bearer "), None);
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
        assert_eq!(JwtService::extract_from_header("abc.def.ghi"), None);
    }
}
