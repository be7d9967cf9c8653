//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(pgpeek::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(pgpeek::config))]
    Config(String),

    /// Database error
    #[error("Database error: {0}")]
    #[diagnostic(code(pgpeek::database))]
    Database(String),

    /// Command error
    #[error("Command error: {0}")]
    #[diagnostic(code(pgpeek::command))]
    Command(String),
}

impl CliError {
    /// The error reported when no connection URL is configured anywhere.
    pub fn missing_url() -> Self {
        CliError::Config("POSTGRES_URL is not set in configuration".to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Config(format!("Failed to parse JSON: {}", err))
    }
}

#[cfg(feature = "postgres")]
impl From<tokio_postgres::Error> for CliError {
    fn from(err: tokio_postgres::Error) -> Self {
        CliError::Database(err.to_string())
    }
}
