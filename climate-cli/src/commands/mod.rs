//! Command implementations for the climate CLI

pub mod serve;

pub use serve::run_serve;
