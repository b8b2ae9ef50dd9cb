//! climate-server: read-only HTTP API over a climate observations dataset
//!
//! Serves precipitation, station, and temperature reports computed from a
//! pre-populated SQLite store with `measurement` and `station` tables.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, verify_schema, DbError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
