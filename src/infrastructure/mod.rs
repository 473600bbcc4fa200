//! Infrastructure Layer
//!
//! Concrete implementations of domain ports, plus process-wide plumbing.
//!
//! ## Structure
//!
//! - `repositories/` - Manifest sources (YAML)
//! - `logging` - `tracing` subscriber setup

pub mod logging;
pub mod repositories;

pub use repositories::YamlManifestSource;
