//! Manifest validation
//!
//! Turns a [`RawManifest`] into a [`Manifest`], or fails with the first
//! configuration error found. Checks run before any combination is
//! resolved:
//!
//! - axis declarations (non-empty, no duplicates)
//! - output type names
//! - selector axes against the registry, and glob syntax in glob mode
//! - duplicate selectors within one specific list
//! - fallback presence when the policy requires it
//! - file key references (blocks, includes, matrix restrictions)
//! - include cycles
//!
//! A selector value the axis does not declare is *not* an error here; it is
//! reported by [`lint`](super::lint) as an unreachable selector.

use tracing::debug;

use crate::domain::entities::{
    Axis, AxisRegistry, CommonEntry, DependencyBlock, FileKey, GlobPattern, Manifest,
    MatrixFilter, OrderedMap, RawBlock, RawFileKey, RawManifest, RawOutputTypes, RawPackage,
    RawScalar, RawSpecificEntry, Selector, SpecificEntry, SpecificSequence, ValuePattern,
};
use crate::domain::errors::ManifestError;
use crate::domain::value_objects::{
    AxisValue, FallbackPolicy, MatchMode, OutputType, PackageEntry, PackageGroup, PackageSpec,
    ResolvePolicy,
};

use super::include_expander::IncludeExpander;

/// Validate a raw manifest tree under `policy`.
pub fn validate(raw: &RawManifest, policy: ResolvePolicy) -> Result<Manifest, ManifestError> {
    let registry = AxisRegistry::new(
        raw.matrix
            .iter()
            .map(|(name, values)| Axis::new(name, values.iter().map(scalar_value).collect()))
            .collect(),
    )?;

    let blocks = raw
        .dependencies
        .iter()
        .map(|(name, block)| convert_block(name, block, policy.match_mode))
        .collect::<Result<Vec<_>, _>>()?;

    let files = raw
        .files
        .iter()
        .map(|(name, file)| convert_file(name, file))
        .collect::<Result<Vec<_>, _>>()?;

    assemble(registry, blocks, files, raw.channels.clone(), policy)
}

/// Cross-check already converted parts and build the manifest.
///
/// Programmatic callers use this directly; [`validate`] ends here too.
pub fn assemble(
    registry: AxisRegistry,
    blocks: Vec<DependencyBlock>,
    files: Vec<FileKey>,
    channels: Vec<String>,
    policy: ResolvePolicy,
) -> Result<Manifest, ManifestError> {
    for block in &blocks {
        check_block(block, &registry, policy, &files)?;
    }

    for file in &files {
        for dependency in &file.dependencies {
            if !blocks.iter().any(|b| &b.name == dependency) {
                return Err(ManifestError::UnknownBlock {
                    file_key: file.name.clone(),
                    block: dependency.clone(),
                });
            }
        }
        for include in &file.includes {
            if !files.iter().any(|f| &f.name == include) {
                return Err(ManifestError::UnknownFileKey {
                    name: include.clone(),
                    referenced_by: file.name.clone(),
                });
            }
        }
        if let Some(matrix) = &file.matrix {
            registry
                .space()
                .restrict(matrix)
                .map_err(|source| ManifestError::InvalidFileMatrix {
                    file_key: file.name.clone(),
                    source,
                })?;
        }
    }

    let manifest = Manifest::from_parts(registry, blocks, files, channels, policy);
    IncludeExpander::expand_all(&manifest)?;

    debug!(
        axes = manifest.registry().len(),
        blocks = manifest.blocks().len(),
        files = manifest.files().len(),
        "manifest validated"
    );
    Ok(manifest)
}

fn check_block(
    block: &DependencyBlock,
    registry: &AxisRegistry,
    policy: ResolvePolicy,
    files: &[FileKey],
) -> Result<(), ManifestError> {
    let users = || {
        files
            .iter()
            .filter(|f| f.dependencies.iter().any(|d| d == &block.name))
            .map(|f| f.name.clone())
            .collect::<Vec<_>>()
    };

    for (_, selector) in block.selectors() {
        if selector.is_fallback() {
            continue;
        }
        if registry.is_empty() {
            return Err(ManifestError::EmptyRegistryWithSelectors {
                block: block.name.clone(),
                selector: selector.to_string(),
                file_keys: users(),
            });
        }
        if let Some((axis, _)) = selector.constraints().find(|(a, _)| !registry.contains(a)) {
            return Err(ManifestError::UnknownAxis {
                block: block.name.clone(),
                selector: selector.to_string(),
                axis: axis.to_string(),
                file_keys: users(),
            });
        }
    }

    for (idx, sequence) in block.specific.iter().enumerate() {
        for (pos, entry) in sequence.entries.iter().enumerate() {
            let repeated = sequence.entries[..pos]
                .iter()
                .any(|earlier| earlier.selector.same_constraints(&entry.selector));
            if repeated {
                return Err(ManifestError::DuplicateSelector {
                    block: block.name.clone(),
                    selector: entry.selector.to_string(),
                });
            }
        }

        if policy.fallback == FallbackPolicy::Required && !sequence.has_fallback() {
            return Err(ManifestError::MissingFallback {
                block: block.name.clone(),
                sequence: idx + 1,
            });
        }
    }

    Ok(())
}

fn scalar_value(scalar: &RawScalar) -> AxisValue {
    AxisValue::from(scalar.0.clone())
}

fn output_types(raw: &RawOutputTypes, context: &str) -> Result<Vec<OutputType>, ManifestError> {
    raw.0
        .iter()
        .map(|name| {
            name.parse::<OutputType>()
                .map_err(|_| ManifestError::UnknownOutputType {
                    name: name.clone(),
                    context: context.to_string(),
                })
        })
        .collect()
}

/// A map entry with several keys becomes one group per key, in order.
fn packages(raw: &Option<Vec<RawPackage>>) -> Vec<PackageEntry> {
    let mut entries = Vec::new();
    for package in raw.iter().flatten() {
        match package {
            RawPackage::Spec(spec) => entries.push(PackageEntry::from(spec.as_str())),
            RawPackage::Groups(groups) => {
                entries.extend(groups.iter().map(|(key, specs)| {
                    PackageEntry::Group(PackageGroup::new(
                        key,
                        specs.iter().map(|s| PackageSpec::from(s.as_str())).collect(),
                    ))
                }));
            }
        }
    }
    entries
}

fn convert_block(
    name: &str,
    raw: &RawBlock,
    match_mode: MatchMode,
) -> Result<DependencyBlock, ManifestError> {
    let context = format!("dependency block '{}'", name);
    let mut block = DependencyBlock::new(name);

    if let Some(types) = &raw.output_types {
        block = block.with_output_types(output_types(types, &context)?);
    }

    for common in &raw.common {
        block = block.with_common(CommonEntry::new(
            output_types(&common.output_types, &context)?,
            packages(&common.packages),
        ));
    }

    for sequence in &raw.specific {
        let entries = sequence
            .matrices
            .iter()
            .map(|entry| convert_entry(name, entry, match_mode))
            .collect::<Result<Vec<_>, _>>()?;
        block = block.with_specific(SpecificSequence::new(
            output_types(&sequence.output_types, &context)?,
            entries,
        ));
    }

    Ok(block)
}

fn convert_entry(
    block: &str,
    raw: &RawSpecificEntry,
    match_mode: MatchMode,
) -> Result<SpecificEntry, ManifestError> {
    let mut selector = Selector::fallback();
    for (axis, scalar) in raw.matrix.iter().flat_map(OrderedMap::iter) {
        let pattern = match (&scalar.0, match_mode) {
            (Some(text), MatchMode::Glob) if is_glob(text) => {
                let glob = GlobPattern::new(text.as_str()).map_err(|err| {
                    ManifestError::InvalidPattern {
                        block: block.to_string(),
                        selector: describe(raw),
                        pattern: text.clone(),
                        message: err.kind().to_string(),
                    }
                })?;
                ValuePattern::Glob(glob)
            }
            _ => ValuePattern::Exact(scalar_value(scalar)),
        };
        selector = selector.with(axis, pattern);
    }
    Ok(SpecificEntry::new(selector, packages(&raw.packages)))
}

fn is_glob(text: &str) -> bool {
    text.contains(['*', '?', '[', '{'])
}

fn describe(raw: &RawSpecificEntry) -> String {
    let pairs: Vec<String> = raw
        .matrix
        .iter()
        .flat_map(OrderedMap::iter)
        .map(|(axis, scalar)| format!("{}: {}", axis, scalar_value(scalar)))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}

fn convert_file(name: &str, raw: &RawFileKey) -> Result<FileKey, ManifestError> {
    let context = format!("file key '{}'", name);
    let mut file = FileKey::new(name)
        .with_output(output_types(&raw.output, &context)?)
        .with_includes(raw.includes.iter().cloned())
        .with_dependencies(raw.dependencies.iter().cloned());

    if let Some(matrix) = &raw.matrix {
        let filter = matrix
            .iter()
            .fold(MatrixFilter::new(), |filter, (axis, values)| {
                filter.with_axis(axis, values.iter().map(scalar_value).collect())
            });
        file = file.with_matrix(filter);
    }

    Ok(file)
}
