//! Check Use Case
//!
//! Validates a manifest without printing package lists: structural errors
//! fail the load, lints and merge conflicts are collected into a report.

use std::path::PathBuf;

use crate::domain::ports::ManifestSource;
use crate::domain::services::{find_conflicts, lint, Lint, MergeConflict};
use crate::domain::value_objects::ResolvePolicy;
use crate::error::DepgenResult;

use super::resolve::load_engine;

/// Options for the check operation
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub manifest_path: PathBuf,
    pub policy: ResolvePolicy,
    pub parallel: bool,
}

impl CheckOptions {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            policy: ResolvePolicy::default(),
            parallel: false,
        }
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

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub axes: usize,
    pub blocks: usize,
    pub files: usize,
    /// Size of the full combination space
    pub combinations: usize,
    /// Number of (file key, output type, combination) lists resolved
    pub resolutions: usize,
    pub lints: Vec<Lint>,
    pub conflicts: Vec<MergeConflict>,
}

impl CheckReport {
    /// No lints and no conflicts.
    pub fn is_clean(&self) -> bool {
        self.lints.is_empty() && self.conflicts.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.lints.len() + self.conflicts.len()
    }
}

/// Check Use Case
pub struct CheckUseCase<S: ManifestSource> {
    source: S,
}

impl<S: ManifestSource> CheckUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: &CheckOptions) -> DepgenResult<CheckReport> {
        let engine = load_engine(
            &self.source,
            &options.manifest_path,
            options.policy,
            options.parallel,
        )?;
        let manifest = engine.manifest();

        let mut report = CheckReport {
            axes: manifest.registry().len(),
            blocks: manifest.blocks().len(),
            files: manifest.files().len(),
            combinations: manifest.registry().space().len(),
            lints: lint(&engine)?,
            ..CheckReport::default()
        };

        for file in manifest.files() {
            for &output in &file.output {
                let results = engine.resolve_all(&file.name, output, None)?;
                report.resolutions += results.len();
                report
                    .conflicts
                    .extend(results.iter().flat_map(find_conflicts));
            }
        }

        Ok(report)
    }
}
