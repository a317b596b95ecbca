//! Unified error type for outline conversion.
//!
//! Parsing and serialization never fail; everything that touches the
//! filesystem or the archive writer reports through this type.
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source file is not valid UTF-8
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid package structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    ZipError(String),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
