//! Include expander
//!
//! Resolves a file key's `includes` into the ordered list of dependency
//! blocks it resolves against: every included key's own expansion, in
//! include order, followed by the key's local blocks. A block reached more
//! than once (diamond includes) keeps its first position.
//!
//! Expansion walks an explicit stack of file key names; meeting a name that
//! is already on the stack is an include cycle.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::Manifest;
use crate::domain::errors::ManifestError;

/// Expanded block indices per file key, computed once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedIncludes {
    blocks: HashMap<String, Vec<usize>>,
}

impl ExpandedIncludes {
    /// Indices into [`Manifest::blocks`] for `file_key`, in resolution order.
    pub fn blocks_for(&self, file_key: &str) -> Option<&[usize]> {
        self.blocks.get(file_key).map(Vec::as_slice)
    }
}

/// Stateful expander with a per-run cache.
#[derive(Debug)]
pub struct IncludeExpander<'m> {
    manifest: &'m Manifest,
    cache: HashMap<String, Vec<usize>>,
    stack: Vec<String>,
}

impl<'m> IncludeExpander<'m> {
    pub fn new(manifest: &'m Manifest) -> Self {
        Self {
            manifest,
            cache: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Expand every file key, failing on the first cycle or dangling reference.
    pub fn expand_all(manifest: &'m Manifest) -> Result<ExpandedIncludes, ManifestError> {
        let mut expander = Self::new(manifest);
        for file in manifest.files() {
            expander.expand(&file.name)?;
        }
        Ok(ExpandedIncludes {
            blocks: expander.cache,
        })
    }

    /// Block indices for `file_key`, included blocks first.
    pub fn expand(&mut self, file_key: &str) -> Result<Vec<usize>, ManifestError> {
        self.stack.clear();
        self.expand_inner(file_key, None)
    }

    fn expand_inner(
        &mut self,
        name: &str,
        referenced_by: Option<&str>,
    ) -> Result<Vec<usize>, ManifestError> {
        if let Some(cached) = self.cache.get(name) {
            return Ok(cached.clone());
        }

        if let Some(pos) = self.stack.iter().position(|n| n == name) {
            let mut chain: Vec<String> = self.stack[pos..].to_vec();
            chain.push(name.to_string());
            return Err(ManifestError::IncludeCycle { chain });
        }

        let manifest = self.manifest;
        let file = manifest
            .file(name)
            .ok_or_else(|| ManifestError::UnknownFileKey {
                name: name.to_string(),
                referenced_by: referenced_by.unwrap_or(name).to_string(),
            })?;

        self.stack.push(name.to_string());

        let mut blocks: Vec<usize> = Vec::new();
        for include in &file.includes {
            let included = self.expand_inner(include, Some(name))?;
            push_unique(&mut blocks, included);
        }

        for dependency in &file.dependencies {
            let idx = manifest
                .block_index(dependency)
                .ok_or_else(|| ManifestError::UnknownBlock {
                    file_key: name.to_string(),
                    block: dependency.clone(),
                })?;
            push_unique(&mut blocks, [idx]);
        }

        self.stack.pop();
        debug!(file_key = name, blocks = blocks.len(), "expanded includes");
        self.cache.insert(name.to_string(), blocks.clone());
        Ok(blocks)
    }
}

fn push_unique(target: &mut Vec<usize>, items: impl IntoIterator<Item = usize>) {
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}
