//! File key entity
//!
//! A named top-level unit of the manifest: which dependency blocks it owns,
//! which other file keys it pulls in, and which output types it produces.

use crate::domain::value_objects::OutputType;

use super::matrix_filter::MatrixFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKey {
    pub name: String,
    /// Output types this file key produces by default
    pub output: Vec<OutputType>,
    /// Included file keys, in declaration order
    pub includes: Vec<String>,
    /// Local dependency block names, in declaration order
    pub dependencies: Vec<String>,
    /// Optional restriction of the registry's axis values
    pub matrix: Option<MatrixFilter>,
}

impl FileKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            output: Vec::new(),
            includes: Vec::new(),
            dependencies: Vec::new(),
            matrix: None,
        }
    }

    pub fn with_output(mut self, output: Vec<OutputType>) -> Self {
        self.output = output;
        self
    }

    pub fn with_includes<S: Into<String>>(mut self, includes: impl IntoIterator<Item = S>) -> Self {
        self.includes = includes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dependencies<S: Into<String>>(
        mut self,
        dependencies: impl IntoIterator<Item = S>,
    ) -> Self {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_matrix(mut self, matrix: MatrixFilter) -> Self {
        self.matrix = Some(matrix);
        self
    }
}
