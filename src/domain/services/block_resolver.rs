//! Dependency block resolver
//!
//! Picks the packages one block contributes to one combination:
//!
//! 1. common entries scoped to the output type, in declaration order
//! 2. for every specific sequence scoped to the output type, **every** entry
//!    whose selector matches, in declaration order
//!
//! All matching entries contribute, not just the most specific one. The
//! empty-selector fallback always matches, so its packages are added next
//! to any specific rows that also match. Duplicates are kept here; the
//! merge engine dedupes.

use tracing::trace;

use crate::domain::entities::{Combination, DependencyBlock};
use crate::domain::value_objects::{OutputType, PackageEntry};

use super::matcher;

/// Packages contributed by `block` for (`output_type`, `combination`).
///
/// A block whose block-level restriction excludes `output_type` contributes
/// nothing.
pub fn resolve_block<'a>(
    block: &'a DependencyBlock,
    output_type: OutputType,
    combination: &Combination,
) -> Vec<&'a PackageEntry> {
    let mut packages = Vec::new();
    if !block.applies_to(output_type) {
        return packages;
    }

    for common in block.common.iter().filter(|c| c.applies_to(output_type)) {
        packages.extend(common.packages.iter());
    }

    for sequence in block.specific.iter().filter(|s| s.applies_to(output_type)) {
        for entry in &sequence.entries {
            if matcher::matches(&entry.selector, combination) {
                trace!(
                    block = %block.name,
                    selector = %entry.selector,
                    combination = %combination,
                    "specific entry matched"
                );
                packages.extend(entry.packages.iter());
            }
        }
    }

    packages
}

#[cfg(test)]
mod tests;
