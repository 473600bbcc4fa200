//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod axis_value;
mod config_warning;
mod output_type;
mod package_entry;
mod package_spec;
mod policy;

pub use axis_value::AxisValue;
pub use config_warning::ConfigWarning;
pub use output_type::OutputType;
pub use package_entry::{PackageEntry, PackageGroup};
pub use package_spec::PackageSpec;
pub use policy::{FallbackPolicy, MatchMode, ResolvePolicy};
