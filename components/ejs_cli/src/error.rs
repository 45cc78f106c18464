//! Error types for the CLI

use core_types::SyntaxError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Script rejected by the parser
    #[error("{0}")]
    Syntax(#[from] SyntaxError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),

    /// JSON report could not be produced
    #[error("Report error: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
