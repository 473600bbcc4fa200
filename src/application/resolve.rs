//! Resolve Use Case
//!
//! Loads a manifest through a [`ManifestSource`], validates it, and resolves
//! the requested file keys for their output types and combinations.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::{MatrixFilter, ResolvedResult};
use crate::domain::errors::ResolveError;
use crate::domain::ports::ManifestSource;
use crate::domain::services::{find_conflicts, validate, Engine, MergeConflict};
use crate::domain::value_objects::{OutputType, ResolvePolicy};
use crate::error::DepgenResult;

/// Options for the resolve operation
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Path to the manifest (`dependencies.yaml`)
    pub manifest_path: PathBuf,
    /// File keys to resolve; empty means every file key
    pub file_keys: Vec<String>,
    /// Single output type overriding each file key's own list
    pub output: Option<OutputType>,
    /// Extra restriction of axis values
    pub matrix: Option<MatrixFilter>,
    /// Merge all requested file keys into one list per combination
    pub merge: bool,
    pub policy: ResolvePolicy,
    pub parallel: bool,
}

impl ResolveOptions {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            file_keys: Vec::new(),
            output: None,
            matrix: None,
            merge: false,
            policy: ResolvePolicy::default(),
            parallel: false,
        }
    }

    pub fn with_file_keys(mut self, file_keys: Vec<String>) -> Self {
        self.file_keys = file_keys;
        self
    }

    pub fn with_output(mut self, output: Option<OutputType>) -> Self {
        self.output = output;
        self
    }

    pub fn with_matrix(mut self, matrix: Option<MatrixFilter>) -> Self {
        self.matrix = matrix;
        self
    }

    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_policy(mut self, policy: ResolvePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of the resolve operation
#[derive(Debug, Clone, Default)]
pub struct ResolveReport {
    /// Resolved lists, grouped by file key then output type, in combination order
    pub resolutions: Vec<ResolvedResult>,
    /// Differing specifiers for the same package inside one list
    pub conflicts: Vec<MergeConflict>,
}

impl ResolveReport {
    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }
}

/// Load, validate and build an engine for the manifest at `path`.
pub fn load_engine<S: ManifestSource>(
    source: &S,
    path: &Path,
    policy: ResolvePolicy,
    parallel: bool,
) -> DepgenResult<Engine> {
    let raw = source.load(path)?;
    let manifest = validate(&raw, policy)?;
    Ok(Engine::new(manifest)?.with_parallel(parallel))
}

/// Resolve Use Case
pub struct ResolveUseCase<S: ManifestSource> {
    source: S,
}

impl<S: ManifestSource> ResolveUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: &ResolveOptions) -> DepgenResult<ResolveReport> {
        let engine = load_engine(
            &self.source,
            &options.manifest_path,
            options.policy,
            options.parallel,
        )?;
        self.execute_with(&engine, options)
    }

    /// Resolve against an already loaded engine.
    pub fn execute_with(
        &self,
        engine: &Engine,
        options: &ResolveOptions,
    ) -> DepgenResult<ResolveReport> {
        let manifest = engine.manifest();
        let file_keys: Vec<String> = if options.file_keys.is_empty() {
            manifest.files().iter().map(|f| f.name.clone()).collect()
        } else {
            for key in &options.file_keys {
                if manifest.file(key).is_none() {
                    return Err(ResolveError::UnknownFileKey { name: key.clone() }.into());
                }
            }
            options.file_keys.clone()
        };

        let filter = options.matrix.as_ref();
        let mut resolutions = Vec::new();

        if options.merge {
            let output = options.output.ok_or(ResolveError::MergeNeedsOutputType)?;
            resolutions = engine.resolve_merged(&file_keys, output, filter)?;
        } else {
            for key in &file_keys {
                let outputs = match options.output {
                    Some(output) => vec![output],
                    None => manifest
                        .file(key)
                        .map(|f| f.output.clone())
                        .unwrap_or_default(),
                };
                for output in outputs {
                    resolutions.extend(engine.resolve_all(key, output, filter)?);
                }
            }
        }

        let conflicts: Vec<MergeConflict> = resolutions.iter().flat_map(find_conflicts).collect();

        info!(
            file_keys = file_keys.len(),
            resolutions = resolutions.len(),
            conflicts = conflicts.len(),
            "resolution finished"
        );

        Ok(ResolveReport {
            resolutions,
            conflicts,
        })
    }
}
