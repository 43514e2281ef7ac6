//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them to stderr and exits
//! non-zero.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Tokio runtime construction failed
    RuntimeError,
    /// HTTP server failed to bind or serve
    ServerError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTERD_CLI_CONFIG_ERROR",
            Self::RuntimeError => "ROSTERD_CLI_RUNTIME_ERROR",
            Self::ServerError => "ROSTERD_CLI_SERVER_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Runtime construction error
    pub fn runtime_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RuntimeError, msg)
    }

    /// Server error
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerError, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[FATAL] {}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
