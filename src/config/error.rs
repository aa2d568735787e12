//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Boolean variable held something other than a recognised flag value.
    #[error("invalid value '{value}' for {name}: expected 1/0, true/false, yes/no or on/off")]
    InvalidFlag { name: &'static str, value: String },

    /// Model name was set but blank.
    #[error("model name cannot be empty")]
    EmptyModel,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
