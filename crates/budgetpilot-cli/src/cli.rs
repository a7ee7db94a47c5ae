//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BudgetPilot - Deterministic safe-to-spend calculator
#[derive(Parser)]
#[command(name = "budgetpilot")]
#[command(about = "Compute a safe-to-spend figure from a budget record", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one calculation and print the result as JSON
    Calc {
        /// Budget input JSON file; reads stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Allowed CORS origin (repeatable); permissive when omitted
        #[arg(long)]
        cors_origin: Vec<String>,
    },
}
