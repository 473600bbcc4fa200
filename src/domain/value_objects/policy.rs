//! Resolution policies
//!
//! Knobs that change how a manifest is validated and how selectors match.
//! They are chosen by the tool settings (`depgen.toml`, env, CLI) and passed
//! into the domain, which never reads them on its own.

use serde::{Deserialize, Serialize};

/// How a sequence of specific entries without an empty-selector entry is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// A sequence may omit the fallback; unmatched combinations get nothing from it
    #[default]
    Optional,
    /// Every sequence must declare an empty-selector entry
    Required,
}

/// How selector values are compared against combination values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Selector value must equal the combination value
    #[default]
    Exact,
    /// Selector value is a shell-style glob (`11.*`)
    Glob,
}

/// Validation and matching policy for one resolution run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvePolicy {
    pub fallback: FallbackPolicy,
    pub match_mode: MatchMode,
}

impl ResolvePolicy {
    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }
}
