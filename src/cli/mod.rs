//! CLI module for rosterd
//!
//! Provides the command-line interface:
//! - serve: build the runtime and enter the HTTP serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
