//! Merge engine
//!
//! Drives resolution for file keys: expands includes once, generates the
//! combination space, runs the block resolver over every block in order and
//! merges the results:
//!
//! - packages are concatenated in (include-expanded) block order
//! - exact duplicates are dropped, keeping the first occurrence
//! - differing specifiers for the same package name are all kept
//! - groups with the same key (`pip: [...]`) fold into the first one, whose
//!   specifiers are deduped the same way
//!
//! Combinations are independent of each other, so `resolve_all` may fan out
//! over a rayon pool. Results are collected in generator order either way.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::domain::entities::{
    Combination, CombinationSpace, DependencyBlock, Manifest, MatrixFilter, ResolvedResult,
};
use crate::domain::errors::{ManifestError, ResolveError};
use crate::domain::value_objects::{OutputType, PackageEntry, PackageGroup};

use super::block_resolver::resolve_block;
use super::include_expander::{ExpandedIncludes, IncludeExpander};

/// Concatenate and dedupe by exact string, keeping first-occurrence order.
pub fn merge<'a>(packages: impl IntoIterator<Item = &'a PackageEntry>) -> Vec<PackageEntry> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged: Vec<PackageEntry> = Vec::new();
    for package in packages {
        match package {
            PackageEntry::Spec(spec) => {
                if seen.insert(spec.as_str()) {
                    merged.push(package.clone());
                }
            }
            PackageEntry::Group(group) => {
                let existing = merged.iter_mut().find_map(|entry| match entry {
                    PackageEntry::Group(known) if known.key == group.key => Some(known),
                    _ => None,
                });
                match existing {
                    Some(known) => known.extend_unique(&group.specs),
                    None => {
                        let mut first = PackageGroup::new(group.key.clone(), Vec::new());
                        first.extend_unique(&group.specs);
                        merged.push(PackageEntry::Group(first));
                    }
                }
            }
        }
    }
    merged
}

/// Resolution engine over one validated manifest.
#[derive(Debug, Clone)]
pub struct Engine {
    manifest: Manifest,
    expanded: ExpandedIncludes,
    parallel: bool,
}

impl Engine {
    /// Expand every file key's includes up front. Fails on include cycles.
    pub fn new(manifest: Manifest) -> Result<Self, ManifestError> {
        let expanded = IncludeExpander::expand_all(&manifest)?;
        Ok(Self {
            manifest,
            expanded,
            parallel: false,
        })
    }

    /// Resolve combinations on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Blocks `file_key` resolves against, included blocks first.
    pub fn blocks_for(&self, file_key: &str) -> Result<Vec<&DependencyBlock>, ResolveError> {
        let indices = self.indices_for(file_key)?;
        Ok(indices.iter().map(|&i| &self.manifest.blocks()[i]).collect())
    }

    /// Combination space of `file_key`: the registry, narrowed by the file
    /// key's own matrix, then by `filter`.
    ///
    /// `filter` is checked against the registry, so naming a declared value
    /// the file key already excludes just yields an empty space.
    pub fn combinations(
        &self,
        file_key: &str,
        filter: Option<&MatrixFilter>,
    ) -> Result<CombinationSpace, ResolveError> {
        let file = self
            .manifest
            .file(file_key)
            .ok_or_else(|| ResolveError::UnknownFileKey {
                name: file_key.to_string(),
            })?;

        let mut space = self.manifest.registry().space();
        if let Some(matrix) = &file.matrix {
            space = space.narrow(matrix);
        }
        self.apply_filter(space, filter)
    }

    /// Resolve one (file key, output type, combination).
    pub fn resolve(
        &self,
        file_key: &str,
        output_type: OutputType,
        combination: &Combination,
    ) -> Result<ResolvedResult, ResolveError> {
        let indices = self.indices_for(file_key)?;
        Ok(ResolvedResult {
            file_key: file_key.to_string(),
            output_type,
            combination: combination.clone(),
            packages: self.collect(indices, output_type, combination),
        })
    }

    /// Resolve every combination of `file_key`, in generator order.
    pub fn resolve_all(
        &self,
        file_key: &str,
        output_type: OutputType,
        filter: Option<&MatrixFilter>,
    ) -> Result<Vec<ResolvedResult>, ResolveError> {
        let _span = info_span!("resolve_all", file_key, output = %output_type).entered();
        let indices = self.indices_for(file_key)?;
        let combinations: Vec<Combination> = self.combinations(file_key, filter)?.iter().collect();
        debug!(
            combinations = combinations.len(),
            blocks = indices.len(),
            parallel = self.parallel,
            "resolving file key"
        );

        let build = |combination: &Combination| ResolvedResult {
            file_key: file_key.to_string(),
            output_type,
            combination: combination.clone(),
            packages: self.collect(indices, output_type, combination),
        };

        let results = if self.parallel {
            combinations.par_iter().map(build).collect()
        } else {
            combinations.iter().map(build).collect()
        };
        Ok(results)
    }

    /// Resolve several file keys into one list per combination.
    ///
    /// Blocks are taken key by key in the given order and deduped across
    /// keys. The combination space is the intersection of every key's own
    /// matrix, narrowed by `filter`.
    pub fn resolve_merged(
        &self,
        file_keys: &[String],
        output_type: OutputType,
        filter: Option<&MatrixFilter>,
    ) -> Result<Vec<ResolvedResult>, ResolveError> {
        let mut indices: Vec<usize> = Vec::new();
        let mut space = self.manifest.registry().space();
        for key in file_keys {
            for &idx in self.indices_for(key)? {
                if !indices.contains(&idx) {
                    indices.push(idx);
                }
            }
            if let Some(matrix) = self.manifest.file(key).and_then(|f| f.matrix.as_ref()) {
                space = space.narrow(matrix);
            }
        }
        let space = self.apply_filter(space, filter)?;

        let label = file_keys.join("+");
        let _span = info_span!("resolve_merged", file_keys = %label).entered();
        let combinations: Vec<Combination> = space.iter().collect();

        let build = |combination: &Combination| ResolvedResult {
            file_key: label.clone(),
            output_type,
            combination: combination.clone(),
            packages: self.collect(&indices, output_type, combination),
        };

        let results = if self.parallel {
            combinations.par_iter().map(build).collect()
        } else {
            combinations.iter().map(build).collect()
        };
        Ok(results)
    }

    fn indices_for(&self, file_key: &str) -> Result<&[usize], ResolveError> {
        self.expanded
            .blocks_for(file_key)
            .ok_or_else(|| ResolveError::UnknownFileKey {
                name: file_key.to_string(),
            })
    }

    fn apply_filter(
        &self,
        space: CombinationSpace,
        filter: Option<&MatrixFilter>,
    ) -> Result<CombinationSpace, ResolveError> {
        match filter {
            Some(filter) => {
                self.manifest.registry().space().restrict(filter)?;
                Ok(space.narrow(filter))
            }
            None => Ok(space),
        }
    }

    fn collect(
        &self,
        indices: &[usize],
        output_type: OutputType,
        combination: &Combination,
    ) -> Vec<PackageEntry> {
        let blocks = self.manifest.blocks();
        merge(
            indices
                .iter()
                .flat_map(|&i| resolve_block(&blocks[i], output_type, combination)),
        )
    }
}
