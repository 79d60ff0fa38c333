//! Error types for navrail
//!
//! Uses `thiserror` for library errors. The taxonomy is deliberately
//! narrow: an unresolvable path or an unknown role is not an error, only
//! a malformed menu definition is.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navrail operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navrail operations
#[derive(Error, Debug)]
pub enum NavError {
    /// Two nodes anywhere in the menu tree share a key. Fatal at
    /// construction time: a colliding key would make path resolution
    /// ambiguous.
    #[error("duplicate menu key '{key}' - keys must be unique across the entire tree")]
    DuplicateKey { key: String },

    /// Menu file failed to parse
    #[error("invalid menu file {file}: {message}")]
    InvalidMenu { file: PathBuf, message: String },

    /// Menu file does not exist
    #[error("menu file not found: {path}")]
    MenuNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
