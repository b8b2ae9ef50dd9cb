//! Database connection pool management
//!
//! Uses a sqlx SqlitePool opened read-only. The dataset is provisioned
//! externally; this service never creates or migrates it.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::repos::DbError;

/// Default maximum connections for the pool.
/// Reads only, so a handful is plenty.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Tables every endpoint depends on
pub const REQUIRED_TABLES: [&str; 2] = ["measurement", "station"];

/// Open a read-only SQLite pool on an existing database file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("Resources/hawaii.sqlite")).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    create_pool_with_options(options, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `options` - Connection options (file, mode, pragmas)
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    options: SqliteConnectOptions,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Check that the measurement and station tables are present.
///
/// Run once at startup so a wrong file fails fast instead of on first request.
pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DbError> {
    for table in REQUIRED_TABLES {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type IN ('table', 'view') AND name = ?",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;

        if count == 0 {
            return Err(DbError::MissingTable { table });
        }
        tracing::debug!(table, "schema check passed");
    }

    Ok(())
}
