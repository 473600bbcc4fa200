//! Matrix Use Case
//!
//! Lists the axis registry and the combinations a file key resolves over.

use std::path::PathBuf;

use crate::domain::entities::{Combination, MatrixFilter};
use crate::domain::errors::ResolveError;
use crate::domain::ports::ManifestSource;
use crate::domain::value_objects::{AxisValue, ResolvePolicy};
use crate::error::DepgenResult;

use super::resolve::load_engine;

#[derive(Debug, Clone)]
pub struct MatrixOptions {
    pub manifest_path: PathBuf,
    /// Apply this file key's own matrix restriction
    pub file_key: Option<String>,
    pub matrix: Option<MatrixFilter>,
    pub policy: ResolvePolicy,
}

impl MatrixOptions {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            file_key: None,
            matrix: None,
            policy: ResolvePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatrixReport {
    /// Declared axes and their values, in declaration order
    pub axes: Vec<(String, Vec<AxisValue>)>,
    /// Combinations in generator order
    pub combinations: Vec<Combination>,
}

pub struct MatrixUseCase<S: ManifestSource> {
    source: S,
}

impl<S: ManifestSource> MatrixUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn execute(&self, options: &MatrixOptions) -> DepgenResult<MatrixReport> {
        let engine = load_engine(&self.source, &options.manifest_path, options.policy, false)?;
        let registry = engine.manifest().registry();
        let filter = options.matrix.as_ref();

        let space = match &options.file_key {
            Some(key) => engine.combinations(key, filter)?,
            None => {
                let space = registry.space();
                match filter {
                    Some(filter) => space.restrict(filter).map_err(ResolveError::from)?,
                    None => space,
                }
            }
        };

        Ok(MatrixReport {
            axes: registry
                .iter()
                .map(|axis| (axis.name().to_string(), axis.values().to_vec()))
                .collect(),
            combinations: space.iter().collect(),
        })
    }
}
