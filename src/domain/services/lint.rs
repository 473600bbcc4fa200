//! Manifest lints
//!
//! Non-fatal findings about a valid manifest. `depgen check --strict` (or
//! `lint.strict = true`) turns any of them into a failure.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::Combination;
use crate::domain::errors::ResolveError;
use crate::domain::value_objects::FallbackPolicy;

use super::matcher;
use super::merge_engine::Engine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lint {
    /// A selector constrains an axis to a value the axis never takes.
    UnreachableSelector {
        block: String,
        selector: String,
        axis: String,
        value: String,
    },
    /// A specific list without fallback leaves some combinations unmatched.
    /// `total` counts the combinations the block is actually resolved for.
    UncoveredCombinations {
        block: String,
        sequence: usize,
        uncovered: usize,
        total: usize,
    },
}

impl std::fmt::Display for Lint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lint::UnreachableSelector {
                block,
                selector,
                axis,
                value,
            } => write!(
                f,
                "selector {} in dependency block '{}' can never match: axis '{}' does not declare '{}'",
                selector, block, axis, value
            ),
            Lint::UncoveredCombinations {
                block,
                sequence,
                uncovered,
                total,
            } => write!(
                f,
                "dependency block '{}' specific list #{} matches nothing for {} of {} combinations (no fallback entry)",
                block, sequence, uncovered, total
            ),
        }
    }
}

/// Collect every lint for the engine's manifest, in block declaration order.
pub fn lint(engine: &Engine) -> Result<Vec<Lint>, ResolveError> {
    let manifest = engine.manifest();
    let registry = manifest.registry();
    let mut lints = Vec::new();

    for block in manifest.blocks() {
        for (_, selector) in block.selectors() {
            for (axis, pattern) in selector.constraints() {
                let Some(declared) = registry.axis(axis) else {
                    continue;
                };
                if !matcher::is_reachable(pattern, declared.values()) {
                    lints.push(Lint::UnreachableSelector {
                        block: block.name.clone(),
                        selector: selector.to_string(),
                        axis: axis.to_string(),
                        value: pattern.source(),
                    });
                }
            }
        }

        if manifest.policy().fallback == FallbackPolicy::Required {
            continue;
        }

        let reachable = reachable_combinations(engine, &block.name)?;
        let total = reachable.len();
        for (idx, sequence) in block.specific.iter().enumerate() {
            if sequence.has_fallback() || sequence.entries.is_empty() {
                continue;
            }
            let uncovered = reachable
                .iter()
                .filter(|combination| {
                    !sequence
                        .entries
                        .iter()
                        .any(|entry| matcher::matches(&entry.selector, combination))
                })
                .count();
            if uncovered > 0 {
                lints.push(Lint::UncoveredCombinations {
                    block: block.name.clone(),
                    sequence: idx + 1,
                    uncovered,
                    total,
                });
            }
        }
    }

    Ok(lints)
}

/// Union of the combination spaces of every file key that resolves `block`,
/// directly or through includes. Empty for a block no file key uses.
fn reachable_combinations(engine: &Engine, block: &str) -> Result<Vec<Combination>, ResolveError> {
    let mut seen = HashSet::new();
    let mut combinations = Vec::new();
    for file in engine.manifest().files() {
        if !engine.blocks_for(&file.name)?.iter().any(|b| b.name == block) {
            continue;
        }
        for combination in engine.combinations(&file.name, None)?.iter() {
            if seen.insert(combination.clone()) {
                combinations.push(combination);
            }
        }
    }
    Ok(combinations)
}
