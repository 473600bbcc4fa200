//! Conflict detection
//!
//! The merge engine keeps differing specifiers for one package name side by
//! side (`cmake>=3.20` and `cmake>=3.23`). This pass reports them so `check`
//! can warn, and fail under strict mode.
//!
//! Each group is its own list: `pip: [numpy]` next to a top-level `numpy=1.26`
//! is not a conflict. Conflicts inside a group are named `<key>:<package>`.

use serde::Serialize;

use crate::domain::entities::ResolvedResult;
use crate::domain::value_objects::PackageSpec;

/// Several distinct specifiers for one package name in one resolved list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeConflict {
    pub file_key: String,
    pub combination: String,
    pub name: String,
    pub specs: Vec<String>,
}

impl std::fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}]: '{}' has conflicting specifiers {}",
            self.file_key,
            self.combination,
            self.name,
            self.specs.join(", ")
        )
    }
}

/// Conflicts in `result`, top-level list first, each ordered by first
/// appearance of the package name.
pub fn find_conflicts(result: &ResolvedResult) -> Vec<MergeConflict> {
    let top_level = result.packages.iter().filter_map(|entry| entry.as_spec());
    let mut conflicts = conflicts_in(result, None, top_level);
    for group in result.groups() {
        conflicts.extend(conflicts_in(result, Some(group.key.as_str()), group.specs.iter()));
    }
    conflicts
}

fn conflicts_in<'a>(
    result: &ResolvedResult,
    group: Option<&str>,
    specs: impl Iterator<Item = &'a PackageSpec>,
) -> Vec<MergeConflict> {
    let mut by_name: Vec<(&str, Vec<String>)> = Vec::new();
    for spec in specs {
        let name = spec.name();
        match by_name.iter_mut().find(|(n, _)| *n == name) {
            Some((_, seen)) => seen.push(spec.to_string()),
            None => by_name.push((name, vec![spec.to_string()])),
        }
    }

    by_name
        .into_iter()
        .filter(|(_, specs)| specs.len() > 1)
        .map(|(name, specs)| MergeConflict {
            file_key: result.file_key.clone(),
            combination: result.combination.to_string(),
            name: match group {
                Some(key) => format!("{}:{}", key, name),
                None => name.to_string(),
            },
            specs,
        })
        .collect()
}
