//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP server
//! - check: validate a component file offline

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
