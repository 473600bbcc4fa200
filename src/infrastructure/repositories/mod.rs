//! Repository Implementations
//!
//! Concrete implementations of domain ports.

mod manifest;

pub use manifest::YamlManifestSource;
