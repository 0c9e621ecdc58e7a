//! Employee Records Server
//!
//! REST API for employee-records management: JWT credential issuance, a
//! bearer-token auth guard, and CRUD + equality-filter search over an
//! employee collection stored in an embedded SurrealDB.
//!
//! # Module structure
//!
//! ```text
//! emp-server/src/
//! ├── core/          # config, state, server startup
//! ├── auth/          # JWT service, middleware, extractor
//! ├── api/           # routers and handlers
//! ├── db/            # database, models, repositories
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
