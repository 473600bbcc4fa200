//! Configuration module for depgen
//!
//! Settings hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (DEPGEN_*)
//! 3. Project settings (`depgen.toml` next to the manifest)
//! 4. User settings (`<config dir>/depgen/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{
    ColorMode, Config, LintConfig, OutputConfig, OutputFormat, ResolveConfig, Verbosity,
};
