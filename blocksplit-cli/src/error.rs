//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration error (file contents or command-line values)
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
    /// Some documents failed while `--keep-going` was set
    PartialFailure {
        /// Documents that failed
        failed: usize,
        /// Documents attempted
        total: usize,
    },
}

impl CliError {
    /// Classify a library error
    pub fn from_core(err: blocksplit_core::Error) -> Self {
        match err {
            blocksplit_core::Error::Configuration(msg) => CliError::ConfigError(msg),
            other => CliError::ProcessingError(other.to_string()),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
            CliError::PartialFailure { failed, total } => {
                write!(f, "{failed} of {total} documents failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
