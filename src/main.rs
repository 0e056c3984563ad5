//! component-store entry point
//!
//! Installs logging, then delegates to the CLI module. Errors are printed
//! to stderr and the process exits non-zero.

use component_store::{cli, logging};

fn main() {
    logging::init_logging();

    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
