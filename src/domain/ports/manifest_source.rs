//! ManifestSource port
//!
//! Reads a manifest from wherever it lives and hands the domain an
//! unvalidated [`RawManifest`]. Validation stays in the domain.

use std::path::{Path, PathBuf};

use crate::domain::entities::RawManifest;

pub trait ManifestSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<RawManifest, ManifestLoadError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ManifestLoadError {
    #[error("manifest not found: {path}\n  → Fix: pass --config <path> or run from the project root")]
    NotFound { path: PathBuf },

    #[error("failed to read manifest {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("failed to parse manifest {path}{}: {message}", .line.map(|l| format!(" (line {})", l)).unwrap_or_default())]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },
}
