//! Error types for Histoview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Histoview operations.
pub type Result<T> = std::result::Result<T, HistoviewError>;

/// Errors that can occur in Histoview.
#[derive(Debug, Error)]
pub enum HistoviewError {
    /// Bin count outside the slider range.
    #[error("Bin count out of range: {value} (expected 0-100)")]
    BinCountOutOfRange {
        /// Rejected value.
        value: u32,
    },

    /// Color name not in the dropdown.
    #[error("Unknown bar color: {name}")]
    UnknownColor {
        /// Rejected name.
        name: String,
    },

    /// Failed to open the log file.
    #[error("Failed to open log file: {path}")]
    LogFile {
        /// Log file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to install the global subscriber.
    #[error("Logging error: {0}")]
    Logging(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HistoviewError {
    /// Create a BinCountOutOfRange error.
    pub fn bin_count_out_of_range(value: u32) -> Self {
        Self::BinCountOutOfRange { value }
    }

    /// Create an UnknownColor error.
    pub fn unknown_color(name: impl Into<String>) -> Self {
        Self::UnknownColor { name: name.into() }
    }

    /// Create a LogFile error.
    pub fn log_file(path: PathBuf, source: std::io::Error) -> Self {
        Self::LogFile { path, source }
    }
}

impl From<tracing::subscriber::SetGlobalDefaultError> for HistoviewError {
    fn from(err: tracing::subscriber::SetGlobalDefaultError) -> Self {
        Self::Logging(err.to_string())
    }
}
