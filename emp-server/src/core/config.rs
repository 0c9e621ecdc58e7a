//! Server configuration
//!
//! All settings are environment-driven with development defaults, loaded
//! once at startup and threaded through [`ServerState`](crate::core::ServerState)
//! instead of living in module-level globals.
//!
//! | Env var | Default | Meaning |
//! |---------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | DATA_DIR | ./data | embedded database directory |
//! | JWT_SECRET | dev constant | HS256 signing secret |
//! | JWT_EXPIRATION_DAYS | 5 | token lifetime |
//! | ENVIRONMENT | development | environment tag |

use crate::auth::JwtConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Directory holding the embedded database
    pub data_dir: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// development defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the paths and port, keeping the rest env-driven.
    ///
    /// Used by tests to point at a throwaway directory.
    pub fn with_overrides(data_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
