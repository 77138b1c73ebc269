//! Postgres persistence for the site content.
//!
//! - [`models`] -- row structs and request DTOs.
//! - [`mapper`] -- folds flat `series LEFT JOIN events` rows into nested series.
//! - [`repositories`] -- one store trait per entity plus its `PgPool` implementation.

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod mapper;
pub mod models;
pub mod repositories;

pub use error::{DbError, MappingError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Every repository call checks a connection out of this pool for the
/// duration of that call only.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations under `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
