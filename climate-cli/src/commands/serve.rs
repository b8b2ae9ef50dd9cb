//! HTTP server command for the climate API
//!
//! Opens the dataset read-only, checks its tables, then serves until
//! Ctrl+C/SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use climate_server::db::{create_pool, verify_schema};
use climate_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "CLIMATE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Path to the SQLite dataset (must already exist)
    #[arg(
        long,
        short = 'd',
        env = "CLIMATE_DATABASE",
        default_value = "Resources/hawaii.sqlite"
    )]
    pub database: PathBuf,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: self.bind,
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!(database = %args.database.display(), "Opening dataset");

    let pool = create_pool(&args.database)
        .await
        .with_context(|| format!("Failed to open database {}", args.database.display()))?;

    verify_schema(&pool)
        .await
        .context("Database is missing the climate tables")?;

    let config = args.server_config();
    tracing::info!("Starting climate API on http://{}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
