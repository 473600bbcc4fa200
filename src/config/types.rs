//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FallbackPolicy, MatchMode, ResolvePolicy};
use crate::error::DepgenResult;

use super::loader::{self, ConfigWarning};

/// Resolution settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Whether every specific list must carry an empty-selector entry
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// How selector values are compared
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    /// Resolve combinations on a thread pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            fallback: FallbackPolicy::default(),
            match_mode: MatchMode::default(),
            parallel: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Lint settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LintConfig {
    /// Treat lints and merge conflicts as errors
    #[serde(default)]
    pub strict: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Default output format when `--json` is not given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Equivalent `-v` count.
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure (`depgen.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub lint: LintConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DepgenResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DepgenResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project settings next to the manifest, then user settings, then
    /// defaults; environment overrides applied last.
    pub fn discover(project_root: &Path) -> DepgenResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (DEPGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Validation and matching policy for the domain.
    pub fn policy(&self) -> ResolvePolicy {
        ResolvePolicy::default()
            .with_fallback(self.resolve.fallback)
            .with_match_mode(self.resolve.match_mode)
    }
}
