//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues read-only queries.
//! Date bounds are bound as canonical ISO strings so SQLite's string
//! comparison is chronological.

pub mod measurements;
pub mod stations;

pub use measurements::MeasurementRepo;
pub use stations::StationRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("no rows in {table}")]
    NoData { table: &'static str },

    #[error("required table '{table}' is missing")]
    MissingTable { table: &'static str },

    #[error("stored date '{value}' is not YYYY-MM-DD")]
    InvalidStoredDate { value: String },
}
