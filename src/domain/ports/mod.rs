//! Domain Ports (Interfaces)
//!
//! Traits at the boundary of the domain layer. The infrastructure layer
//! provides the implementations.

pub mod manifest_source;

pub use manifest_source::{ManifestLoadError, ManifestSource};
