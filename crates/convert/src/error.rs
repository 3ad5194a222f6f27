//! Error types for conversion operations.

use thiserror::Error;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Error types for conversion operations.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// External converter program is not installed or not on PATH.
    #[error("Converter tool not found: '{tool}'")]
    ToolUnavailable { tool: String },

    /// External converter program ran but exited non-zero.
    #[error("'{tool}' failed with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// Conversion pair is not supported by the tool.
    #[error("Unsupported conversion: '{from}' -> '{to}'")]
    UnsupportedConversion { from: String, to: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
