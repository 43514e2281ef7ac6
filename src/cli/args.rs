//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterd serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterd - A minimal in-memory student roster HTTP service
#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to an optional JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
