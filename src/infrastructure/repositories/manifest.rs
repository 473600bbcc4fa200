//! YAML Manifest Repository
//!
//! Implements the ManifestSource port for `dependencies.yaml` style files.

use std::path::Path;

use crate::domain::entities::RawManifest;
use crate::domain::ports::{ManifestLoadError, ManifestSource};

/// Reads manifests from YAML files on the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestSource;

impl YamlManifestSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse manifest text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<RawManifest, ManifestLoadError> {
        // An empty document is an empty manifest, not a type error.
        if content.trim().is_empty() {
            return Ok(RawManifest::default());
        }

        serde_yaml_ng::from_str(content).map_err(|err| ManifestLoadError::Parse {
            path: path.to_path_buf(),
            line: err.location().map(|loc| loc.line()),
            message: err.to_string(),
        })
    }
}

impl ManifestSource for YamlManifestSource {
    fn load(&self, path: &Path) -> Result<RawManifest, ManifestLoadError> {
        if !path.exists() {
            return Err(ManifestLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|err| ManifestLoadError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read manifest");
        Self::parse(&content, path)
    }
}
