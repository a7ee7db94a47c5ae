//! BudgetPilot CLI - Safe-to-spend calculator
//!
//! Usage:
//!   budgetpilot calc --file budget.json   Run one calculation
//!   budgetpilot calc < budget.json        Same, reading stdin
//!   budgetpilot serve --port 8000         Start the REST API server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Calc { file, pretty } => commands::cmd_calc(file.as_deref(), pretty),
        Commands::Serve {
            port,
            host,
            cors_origin,
        } => commands::cmd_serve(&host, port, cors_origin).await,
    }
}
