//! Error types for fnloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or scanning source files
#[derive(Error, Debug)]
pub enum FnlocError {
    /// Failed to read (or decode) a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// The worker pool could not be built
    #[error("failed to start worker pool: {0}")]
    WorkerPool(String),
}
