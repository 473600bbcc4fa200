//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FallbackPolicy, MatchMode};
use crate::error::{DepgenError, DepgenResult};

pub use crate::domain::value_objects::ConfigWarning;

use super::types::{Config, Verbosity};

/// Project settings file name, looked up next to the manifest.
pub const PROJECT_CONFIG_FILE: &str = "depgen.toml";

/// User settings path, relative to the platform config directory.
pub const USER_CONFIG_FILE: &str = "depgen/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DepgenResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DepgenError::Settings {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the settings that apply to a manifest living in `project_root`.
///
/// The first existing file wins; files are not merged. A file that exists
/// but does not parse is an error rather than a silent fallback.
pub fn discover(project_root: &Path) -> DepgenResult<(Config, Vec<ConfigWarning>)> {
    for candidate in candidates(project_root) {
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading settings");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn candidates(project_root: &Path) -> Vec<PathBuf> {
    let mut paths = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(USER_CONFIG_FILE));
    }
    paths
}

/// Apply environment variable overrides (DEPGEN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // DEPGEN_FALLBACK
    if let Some(fallback) = get_env("DEPGEN_FALLBACK") {
        match fallback.to_lowercase().as_str() {
            "required" => config.resolve.fallback = FallbackPolicy::Required,
            "optional" => config.resolve.fallback = FallbackPolicy::Optional,
            _ => {}
        }
    }

    // DEPGEN_MATCH
    if let Some(mode) = get_env("DEPGEN_MATCH") {
        match mode.to_lowercase().as_str() {
            "glob" => config.resolve.match_mode = MatchMode::Glob,
            "exact" => config.resolve.match_mode = MatchMode::Exact,
            _ => {}
        }
    }

    // DEPGEN_STRICT
    if let Some(val) = get_env("DEPGEN_STRICT") {
        config.lint.strict = is_truthy(&val);
    }

    // DEPGEN_PARALLEL
    if let Some(val) = get_env("DEPGEN_PARALLEL") {
        config.resolve.parallel = is_truthy(&val);
    }

    // DEPGEN_VERBOSITY
    if let Some(verbosity) = get_env("DEPGEN_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn is_truthy(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolve",
        "fallback",
        "match",
        "parallel",
        "lint",
        "strict",
        "output",
        "verbosity",
        "color",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
