//! Domain Layer
//!
//! The core of depgen: matrix resolution without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Axis registry, combinations, selectors, blocks, file keys
//! - `value_objects/` - Small immutable types (AxisValue, OutputType, PackageEntry)
//! - `services/` - Validation, matching, block resolution, include expansion, merging
//! - `ports/` - Interface definitions for infrastructure
//! - `errors` - Structured manifest and resolution errors

pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;
