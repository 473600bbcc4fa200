//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Policy flags (--fallback, --match) override `depgen.toml` and `DEPGEN_*`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::entities::MatrixFilter;
use crate::domain::value_objects::{FallbackPolicy, MatchMode, OutputType};

/// Default manifest path, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "dependencies.yaml";

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// depgen - resolve matrix-aware dependency lists
#[derive(Parser, Debug)]
#[command(name = "depgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that loads a manifest.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct PolicyArgs {
    /// Whether every specific list needs an empty-selector fallback
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackPolicy>,

    /// How selector values are compared
    #[arg(long = "match", value_enum)]
    pub match_mode: Option<MatchMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve dependency lists for file keys, output types and combinations
    Resolve {
        /// Path to the manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        config: PathBuf,

        /// File keys to resolve (default: all)
        #[arg(short = 'f', long = "file-key", value_name = "KEY", value_delimiter = ',')]
        file_keys: Vec<String>,

        /// Output type (default: each file key's own list)
        #[arg(short, long, value_enum)]
        output: Option<OutputType>,

        /// Restrict axis values, e.g. "cuda=11.5,11.6;arch=x86_64"
        #[arg(long, value_name = "FILTER")]
        matrix: Option<MatrixFilter>,

        /// Merge the file keys into one list per combination (needs --output)
        #[arg(long)]
        merge: bool,

        /// Fail when a list holds conflicting specifiers for one package
        #[arg(long)]
        strict: bool,

        /// Resolve combinations on a single thread
        #[arg(long)]
        no_parallel: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Validate a manifest and report lints and merge conflicts
    Check {
        /// Path to the manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        config: PathBuf,

        /// Fail on lints and conflicts too (CI mode)
        #[arg(long)]
        strict: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// List axes and the combinations a file key resolves over
    Matrix {
        /// Path to the manifest
        #[arg(short, long, default_value = DEFAULT_MANIFEST)]
        config: PathBuf,

        /// Apply this file key's own matrix restriction
        #[arg(short = 'f', long = "file-key", value_name = "KEY")]
        file_key: Option<String>,

        /// Restrict axis values, e.g. "cuda=11.5,11.6;arch=x86_64"
        #[arg(long, value_name = "FILTER")]
        matrix: Option<MatrixFilter>,
    },

    /// Show version information
    Version,
}
