//! Diagnostic logging
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays
//! reserved for resolved package lists and NDJSON events. The level comes
//! from `-v` flags (or `output.verbosity`); `DEPGEN_LOG` and then `RUST_LOG`
//! take precedence when set.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "DEPGEN_LOG";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {message}")]
    InvalidFilter { filter: String, message: String },

    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// `-v` count to level: warnings by default, then info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter from an explicit directive, falling back to `level`.
pub fn build_env_filter(
    level: LevelFilter,
    directive: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directive {
        Some(filter) if !filter.trim().is_empty() => {
            builder
                .parse(filter)
                .map_err(|e| LoggingError::InvalidFilter {
                    filter: filter.to_string(),
                    message: e.to_string(),
                })
        }
        _ => Ok(builder.parse_lossy("")),
    }
}

/// Install the global subscriber. Call once, early in `main`.
pub fn init(verbosity: u8, color: bool) -> Result<(), LoggingError> {
    let directive = std::env::var(LOG_ENV)
        .ok()
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = build_env_filter(level_for(verbosity), directive.as_deref())?;

    let layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(verbosity >= 2)
        .with_ansi(color)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}
