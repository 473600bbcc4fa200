//! depgen - matrix-aware dependency list resolver
//!
//! A manifest (`dependencies.yaml`) declares a build matrix, named dependency
//! blocks with common and axis-specific package lists, and file keys that
//! select blocks and output types. depgen expands the matrix, picks every
//! matching entry per combination and merges the results into one ordered,
//! duplicate-free list per (file key, output type, combination).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckOptions, CheckReport, CheckUseCase, MatrixOptions, MatrixReport, MatrixUseCase,
    ResolveOptions, ResolveReport, ResolveUseCase,
};
pub use config::Config;
pub use domain::entities::{Combination, Manifest, MatrixFilter, ResolvedResult};
pub use domain::services::{validate, Engine};
pub use domain::value_objects::{AxisValue, OutputType, PackageEntry, PackageSpec, ResolvePolicy};
pub use error::{DepgenError, DepgenResult};
pub use infrastructure::YamlManifestSource;
