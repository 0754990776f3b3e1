//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing a recording file
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read recording: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected at least 3 comma-separated fields, found {found}")]
    TooFewFields { line: usize, found: usize },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("recording contains no samples to plot")]
    EmptyRecording,

    #[error("chart backend error: {0}")]
    Backend(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("invalid output path: {0}")]
    InvalidPath(String),
}
