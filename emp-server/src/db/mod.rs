//! Database Module
//!
//! Owns the embedded SurrealDB connection and table definitions.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "emp";
const DATABASE: &str = "emp";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at the given path and apply definitions
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        Self::define_schema(&db).await?;

        tracing::info!("Database opened at {db_path}");
        Ok(Self { db })
    }

    /// Idempotent index definitions.
    ///
    /// The unique index on employee email closes the race the repository's
    /// check-then-insert duplicate check leaves open.
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            r#"
            DEFINE INDEX IF NOT EXISTS employee_email ON TABLE employee FIELDS email UNIQUE;
            DEFINE INDEX IF NOT EXISTS user_email ON TABLE user FIELDS email UNIQUE;
            DEFINE INDEX IF NOT EXISTS user_username ON TABLE user FIELDS username UNIQUE;
            "#,
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Schema definition failed: {e}")))?;
        Ok(())
    }
}
