//! Resolved result

use serde::Serialize;

use crate::domain::value_objects::{OutputType, PackageEntry, PackageGroup, PackageSpec};

use super::combination::Combination;

/// The final package list for one (file key, output type, combination).
///
/// Packages are unique by exact string and keep first-occurrence order.
/// Each group key appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedResult {
    pub file_key: String,
    pub output_type: OutputType,
    pub combination: Combination,
    pub packages: Vec<PackageEntry>,
}

impl ResolvedResult {
    /// Top-level specifiers, without the contents of groups.
    pub fn specifiers(&self) -> impl Iterator<Item = &str> {
        self.packages
            .iter()
            .filter_map(PackageEntry::as_spec)
            .map(PackageSpec::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = &PackageGroup> {
        self.packages.iter().filter_map(PackageEntry::as_group)
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
