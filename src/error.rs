//! Error types for depgen
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::errors::{ManifestError, ResolveError};
use crate::domain::ports::ManifestLoadError;

/// Result type alias for depgen operations
pub type DepgenResult<T> = Result<T, DepgenError>;

/// Main error type for depgen operations
#[derive(Error, Debug)]
pub enum DepgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be parsed
    #[error("invalid settings in {file}: {message}")]
    Settings { file: PathBuf, message: String },

    /// Manifest could not be read or parsed
    #[error(transparent)]
    Load(#[from] ManifestLoadError),

    /// Manifest is structurally invalid
    #[error("invalid manifest: {0}")]
    Manifest(#[from] ManifestError),

    /// Resolution request does not fit the manifest
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// `--strict` turned lints or conflicts into a failure
    #[error("{count} problem(s) found in strict mode")]
    Strict { count: usize },
}

impl DepgenError {
    /// Stable machine-readable code for JSON error events.
    pub fn code(&self) -> &'static str {
        match self {
            DepgenError::Io(_) => "io",
            DepgenError::Settings { .. } => "settings",
            DepgenError::Load(ManifestLoadError::NotFound { .. }) => "manifest_not_found",
            DepgenError::Load(_) => "manifest_parse",
            DepgenError::Manifest(_) => "manifest_invalid",
            DepgenError::Resolve(_) => "resolve",
            DepgenError::Strict { .. } => "strict",
        }
    }
}
