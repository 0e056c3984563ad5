//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use crate::components::{extract, validate, PropsSchema};
use crate::http_server::{HttpServer, ServerConfig};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            host,
            port,
            data_dir,
        } => {
            let config = resolve_config(config.as_deref(), host, port, data_dir)?;
            serve(config)
        }
        Command::Check { file } => {
            let schema = check(&file)?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

/// Load the config file (if any) and apply overrides on top
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data_dir: Option<PathBuf>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if data_dir.is_some() {
        config.data_dir = data_dir;
    }

    config.validate()?;
    Ok(config)
}

/// Run the HTTP server until shutdown
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let server = HttpServer::from_config(config)?;
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a component file and derive its props schema
pub fn check(path: &Path) -> CliResult<PropsSchema> {
    let code = fs::read_to_string(path)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e)))?;

    validate(&code)?;
    Ok(extract(&code))
}
