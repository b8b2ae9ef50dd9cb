//! Route handlers organized by resource

pub mod index;
pub mod health;
pub mod precipitation;
pub mod stations;
pub mod tobs;
pub mod temperature;

/// Versioned prefix shared by every data endpoint
pub const API_PREFIX: &str = "/api/v1.0";
