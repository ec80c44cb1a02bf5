//! Error types for binding generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenError {
    /// A named input file or document does not exist
    #[error("not found: {0}")]
    NotFound(PathBuf),

    /// The output path exists and is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A class definition is missing required keys or carries unknown ones
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// An output format other than the recognized kinds was requested
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
