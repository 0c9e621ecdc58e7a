//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.

pub mod employee;
pub mod user;

pub use employee::EmployeeRepository;
pub use user::UserRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for crate::utils::AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => crate::utils::AppError::NotFound(msg),
            RepoError::Duplicate(msg) => crate::utils::AppError::BadRequest(msg),
            RepoError::Database(msg) => crate::utils::AppError::Database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings end to end
// =============================================================================
//
// surrealdb::RecordId handles all ids:
//   - parse: let id: RecordId = "employee:abc".parse()?;
//   - build: let id = RecordId::from_table_key("employee", "abc");
//   - CRUD: db.select(id) / db.update(id) / db.delete(id) take RecordId
//
// Path parameters may arrive either as a bare key or as the full "table:id"
// string; ids that fail to parse are treated as not-found, never as a
// distinct bad-request.

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
