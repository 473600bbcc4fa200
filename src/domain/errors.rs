//! Domain errors
//!
//! Structured error values returned by the resolver core. The core never
//! prints; the presentation layer turns these into CLI messages.

use thiserror::Error;

/// Fatal configuration error found while validating a manifest.
///
/// Any of these aborts the whole run before a single combination is resolved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("axis '{axis}' is declared twice")]
    DuplicateAxis { axis: String },

    #[error("axis '{axis}' declares no values\n  → Fix: list at least one value, or `null` for \"no value\"")]
    EmptyAxis { axis: String },

    #[error("axis '{axis}' declares value '{value}' more than once")]
    DuplicateAxisValue { axis: String, value: String },

    #[error("selector {selector} in dependency block '{block}' references undeclared axis '{axis}'{}", used_by(.file_keys))]
    UnknownAxis {
        block: String,
        selector: String,
        axis: String,
        file_keys: Vec<String>,
    },

    #[error("selector {selector} in dependency block '{block}' constrains axes, but the manifest declares no matrix{}", used_by(.file_keys))]
    EmptyRegistryWithSelectors {
        block: String,
        selector: String,
        file_keys: Vec<String>,
    },

    #[error("selector {selector} in dependency block '{block}' has an invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        block: String,
        selector: String,
        pattern: String,
        message: String,
    },

    #[error("dependency block '{block}' lists selector {selector} more than once in the same specific list")]
    DuplicateSelector { block: String, selector: String },

    #[error("dependency block '{block}' specific list #{sequence} has no fallback entry\n  → Fix: add an entry with `matrix: {{}}` (fallback policy is 'required')")]
    MissingFallback { block: String, sequence: usize },

    #[error("unknown output type '{name}' in {context}")]
    UnknownOutputType { name: String, context: String },

    #[error("file key '{file_key}' references undeclared dependency block '{block}'")]
    UnknownBlock { file_key: String, block: String },

    #[error("file key '{referenced_by}' includes undeclared file key '{name}'")]
    UnknownFileKey { name: String, referenced_by: String },

    #[error("file key '{file_key}' has an invalid matrix: {source}")]
    InvalidFileMatrix {
        file_key: String,
        #[source]
        source: FilterError,
    },

    #[error("include cycle detected: {}", .chain.join(" → "))]
    IncludeCycle { chain: Vec<String> },
}

fn used_by(file_keys: &[String]) -> String {
    if file_keys.is_empty() {
        String::new()
    } else {
        format!(" (used by file keys: {})", file_keys.join(", "))
    }
}

/// A matrix restriction that does not fit the axis registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown axis '{axis}'")]
    UnknownAxis { axis: String },

    #[error("axis '{axis}' does not declare value '{value}'")]
    UnknownValue { axis: String, value: String },

    #[error("axis '{axis}' lists no values\n  → Fix: list at least one value, or drop the axis to keep all of them")]
    EmptyValues { axis: String },

    #[error("malformed matrix filter '{spec}': {reason}")]
    Malformed { spec: String, reason: String },
}

/// Error for a resolution request against a valid manifest.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unknown file key '{name}'")]
    UnknownFileKey { name: String },

    #[error("invalid matrix filter: {0}")]
    Filter(#[from] FilterError),

    #[error("merging several file keys needs exactly one output type\n  → Fix: pass --output")]
    MergeNeedsOutputType,
}
