//! SQLite access layer for Tasklane.
//!
//! Owns pool construction, embedded migrations, the idempotent seed
//! bootstrap, row models, and one repository per entity.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub mod bootstrap;
pub mod models;
pub mod repositories;

/// Database connection pool shared across the application.
pub type DbPool = SqlitePool;

/// Create a connection pool for the given `sqlite://` URL.
///
/// The database file is created on first run and foreign-key enforcement
/// is switched on for every connection (SQLite defaults it to off).
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
