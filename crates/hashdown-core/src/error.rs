//! Error types for Hashdown parsing and file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing Hashdown or moving it through files.
#[derive(Error, Debug)]
pub enum HashdownError {
    /// A header or list line nested deeper than the current position allows.
    /// Carries the 1-based line number and the raw, untrimmed line.
    #[error("Invalid node depth at line {line}: {text}")]
    Structure { line: usize, text: String },

    /// A dash item or bare header needed an automatic key after `u64::MAX`.
    #[error("No automatic key left at line {line}: {text}")]
    KeyOverflow { line: usize, text: String },

    /// The file handed to [`read_file`](crate::read_file) does not exist.
    #[error("Failed to open non-existent file: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing an existing path failed.
    #[error("Failed to {action} file {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input handed to the JSON bridge was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout hashdown-core.
pub type Result<T> = std::result::Result<T, HashdownError>;
