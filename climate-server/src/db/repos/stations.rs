//! Station repository

use sqlx::SqlitePool;

use super::DbError;

/// Station repository
pub struct StationRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StationRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Distinct station display names, in the order the store returns them.
    pub async fn distinct_names(&self) -> Result<Vec<String>, DbError> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT name FROM station WHERE name IS NOT NULL")
                .fetch_all(self.pool)
                .await?;

        Ok(names)
    }
}
