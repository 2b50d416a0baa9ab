//! Error types for Sweep
//!
//! Uses `thiserror` for library errors. Per-entry deletion failures are not
//! errors at this level: they are recorded as outcomes in the run summary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sweep operations
pub type SweepResult<T> = Result<T, SweepError>;

/// Main error type for Sweep operations
#[derive(Error, Debug)]
pub enum SweepError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Manifest entry is malformed (empty or absolute path)
    #[error("invalid manifest entry '{path}': {reason}")]
    InvalidManifestEntry { path: String, reason: String },

    /// Manifest entry would resolve outside the root
    #[error("path '{path}' escapes sweep root")]
    PathEscape { path: PathBuf },

    /// Refusing to overwrite an existing file
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },
}
