//! Error types for directory embedding and code generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for dir2src operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while walking the input tree or writing output
#[derive(Debug, Error)]
pub enum Error {
    /// A path segment contains no usable identifier characters
    #[error("Path segment {segment:?} sanitizes to an empty identifier")]
    InvalidName { segment: String },

    /// An input directory or file could not be opened or read
    #[error("Failed to read input {path}: {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output directory or file could not be created or written
    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
