//! Manifest entity
//!
//! The validated, immutable configuration of one resolution run. Only
//! [`validate`](crate::domain::services::validate) and
//! [`assemble`](crate::domain::services::assemble) construct it, so holding a
//! `Manifest` means every selector names a declared axis, every reference
//! resolves and every policy check has passed.

use crate::domain::value_objects::ResolvePolicy;

use super::axis::AxisRegistry;
use super::block::DependencyBlock;
use super::file_key::FileKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    registry: AxisRegistry,
    blocks: Vec<DependencyBlock>,
    files: Vec<FileKey>,
    channels: Vec<String>,
    policy: ResolvePolicy,
}

impl Manifest {
    pub(crate) fn from_parts(
        registry: AxisRegistry,
        blocks: Vec<DependencyBlock>,
        files: Vec<FileKey>,
        channels: Vec<String>,
        policy: ResolvePolicy,
    ) -> Self {
        Self {
            registry,
            blocks,
            files,
            channels,
            policy,
        }
    }

    pub fn registry(&self) -> &AxisRegistry {
        &self.registry
    }

    /// Dependency blocks in declaration order.
    pub fn blocks(&self) -> &[DependencyBlock] {
        &self.blocks
    }

    /// File keys in declaration order.
    pub fn files(&self) -> &[FileKey] {
        &self.files
    }

    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    pub fn file(&self, name: &str) -> Option<&FileKey> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn block(&self, name: &str) -> Option<&DependencyBlock> {
        self.blocks.iter().find(|b| b.name == name)
    }

    pub(crate) fn block_index(&self, name: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.name == name)
    }

    /// File keys that list `block` among their local dependencies.
    pub fn users_of(&self, block: &str) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| f.dependencies.iter().any(|d| d == block))
            .map(|f| f.name.clone())
            .collect()
    }
}
