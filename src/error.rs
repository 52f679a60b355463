use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for pkg-version operations
#[derive(Error, Debug)]
pub enum PkgVersionError {
    #[error("Invalid version format: {0}")]
    Format(String),

    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid arguments: {0}")]
    Validation(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in pkg-version
pub type Result<T> = std::result::Result<T, PkgVersionError>;

impl PkgVersionError {
    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        PkgVersionError::Format(msg.into())
    }

    /// Create a not-found error for a path
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        PkgVersionError::NotFound(path.into())
    }

    /// Create a validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        PkgVersionError::Validation(msg.into())
    }

    /// Create a manifest content error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        PkgVersionError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        PkgVersionError::Config(msg.into())
    }
}
