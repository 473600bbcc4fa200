//! CLI command handlers
//!
//! Each handler returns `Ok(true)` on success, `Ok(false)` when the failure
//! was already reported (JSON error event, strict-mode findings), and `Err`
//! for anything `main` still has to print.

pub mod check;
pub mod matrix;
pub mod resolve;
pub mod session;
pub mod version;

use depgen::presentation::ColorWhen;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct Globals {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}
