//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Alpha string could not be parsed as a float.
    #[error("failed to parse alpha '{value}': {source}")]
    AlphaParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Alpha value is outside `[0, 1]`.
    #[error("invalid alpha '{value}': must be within [0, 1]")]
    InvalidAlpha { value: String },

    /// An integer setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Top-n must be positive.
    #[error("invalid top_n: must be positive")]
    InvalidTopN,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file.
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
