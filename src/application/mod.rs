//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Load, validate and resolve file keys
//! - `CheckUseCase` - Validate, lint and report merge conflicts
//! - `MatrixUseCase` - List axes and combinations

pub mod check;
pub mod matrix;
pub mod resolve;

#[cfg(test)]
pub(crate) mod testing;

pub use check::{CheckOptions, CheckReport, CheckUseCase};
pub use matrix::{MatrixOptions, MatrixReport, MatrixUseCase};
pub use resolve::{load_engine, ResolveOptions, ResolveReport, ResolveUseCase};
