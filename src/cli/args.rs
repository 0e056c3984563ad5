//! CLI argument definitions using clap
//!
//! Commands:
//! - component-store serve [--config <path>] [--host <host>] [--port <port>] [--data-dir <dir>]
//! - component-store check <file>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Component store - validates, indexes and serves UI component source
#[derive(Parser, Debug)]
#[command(name = "component-store")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Directory for stored components (memory only when unset)
        #[arg(long, env = "COMPONENT_STORE_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Validate a component file and print its props schema
    Check {
        /// Component source file
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
