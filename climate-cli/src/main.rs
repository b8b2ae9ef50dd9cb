//! climate CLI - serves the climate observations API
//!
//! Subcommands:
//! - `serve`: run the read-only HTTP API over a SQLite dataset

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "climate",
    author,
    version,
    about = "Read-only HTTP API over a climate observations dataset",
    long_about = "Serve precipitation, station, and temperature statistics computed from a \
                  pre-populated SQLite store of weather station measurements."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up CLIMATE_* settings from a local .env if present
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            tracing_setup::init(&TracingConfig { debug: args.debug }).ok();
            commands::run_serve(args).await?
        }
    }
    Ok(())
}
