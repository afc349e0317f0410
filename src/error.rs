//! Error types for the baseline engine and its entry points.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking, hashing, or persisting a baseline.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid chunk size: {0} (must be at least 1 byte)")]
    InvalidChunkSize(usize),

    #[error("Baseline store unavailable at {path}: {reason}")]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("Not a valid baseline store: {0}")]
    StoreFormat(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Top-level errors surfaced by the command entry points.
#[derive(Debug, Error)]
pub enum IntactError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<config::ConfigError> for IntactError {
    fn from(err: config::ConfigError) -> Self {
        IntactError::Config(err.to_string())
    }
}
