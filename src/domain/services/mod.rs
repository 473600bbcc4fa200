//! Domain Services
//!
//! Pure resolution logic over domain entities. No I/O; everything here is
//! driven by the application layer and tested in isolation.

mod block_resolver;
mod conflicts;
mod include_expander;
mod lint;
mod matcher;
mod merge_engine;
mod validator;

pub use block_resolver::resolve_block;
pub use conflicts::{find_conflicts, MergeConflict};
pub use include_expander::{ExpandedIncludes, IncludeExpander};
pub use lint::{lint, Lint};
pub use matcher::{is_reachable, matches, specificity, value_matches};
pub use merge_engine::{merge, Engine};
pub use validator::{assemble, validate};
