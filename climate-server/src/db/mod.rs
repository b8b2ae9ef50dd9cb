//! Database layer - read-only connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool opened read-only, shared by all handlers - no global session
//! - Statically declared row structs, no schema reflection
//! - Aggregation happens in SQL, reshaping happens in `models`

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, verify_schema};
pub use repos::*;
