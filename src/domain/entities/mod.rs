//! Domain Entities
//!
//! Core domain entities of the resolver.
//! - `AxisRegistry` / `Axis` - the declared build matrix
//! - `Combination` / `CombinationSpace` - concrete assignments and their generator
//! - `Selector` - partial assignment keying a specific entry
//! - `DependencyBlock` - common + specific package lists
//! - `FileKey` - top-level unit owning blocks and includes
//! - `Manifest` - the validated whole
//! - `RawManifest` - the unvalidated tree handed over by a source

mod axis;
mod block;
mod combination;
mod file_key;
mod manifest;
mod matrix_filter;
mod raw_manifest;
mod resolved;
mod selector;

pub use axis::{Axis, AxisRegistry};
pub use block::{CommonEntry, DependencyBlock, SpecificEntry, SpecificSequence};
pub use combination::{Combination, CombinationSpace, Combinations};
pub use file_key::FileKey;
pub use manifest::Manifest;
pub use matrix_filter::MatrixFilter;
pub use raw_manifest::{
    OrderedMap, RawBlock, RawCommonEntry, RawExtras, RawFileKey, RawManifest, RawOutputTypes,
    RawPackage, RawScalar, RawSpecificEntry, RawSpecificSequence,
};
pub use resolved::ResolvedResult;
pub use selector::{GlobPattern, Selector, ValuePattern};
