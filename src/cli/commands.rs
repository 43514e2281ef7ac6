//! CLI command implementations.
//!
//! `run` is the single entry point used by main: it parses arguments,
//! initializes logging, and dispatches to the command.

use std::path::Path;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments, initialize logging, and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Start the HTTP server.
///
/// Configuration precedence: CLI flags over config file over defaults.
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => HttpServerConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime_error(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_error(format!("HTTP server failed: {}", e)))
    })
}

fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        CliError::config_error(format!("Cannot read config file '{}': {}", path.display(), e))
    })?;
    serde_json::from_str(&raw).map_err(|e| {
        CliError::config_error(format!("Malformed config file '{}': {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/rosterd.json")).unwrap_err();
        assert_eq!(err.code(), super::super::errors::CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_config_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "127.0.0.1", "port": 9999}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.socket_addr(), "127.0.0.1:9999");
    }

    #[test]
    fn test_load_config_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert_eq!(err.code(), super::super::errors::CliErrorCode::ConfigError);
    }
}
