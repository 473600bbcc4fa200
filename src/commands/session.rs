use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use depgen::config::Config;
use depgen::domain::value_objects::ResolvePolicy;
use depgen::infrastructure::logging;
use depgen::presentation::cli::PolicyArgs;
use depgen::DepgenError;

use super::Globals;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ErrorEvent, StartEvent, WarningEvent};
use crate::ui::output::print_config_warnings;

/// Settings are looked up next to the manifest.
pub(crate) fn settings_root(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// CLI flags win over settings and environment.
pub(crate) fn effective_policy(config: &Config, args: &PolicyArgs) -> ResolvePolicy {
    let mut policy = config.policy();
    if let Some(fallback) = args.fallback {
        policy.fallback = fallback;
    }
    if let Some(match_mode) = args.match_mode {
        policy.match_mode = match_mode;
    }
    policy
}

/// Loaded settings plus output context for one command run.
pub struct Session {
    pub command: &'static str,
    pub config: Config,
    pub ui: UiContext,
    started: Instant,
}

impl Session {
    /// Load settings, install logging, announce the command and surface
    /// settings warnings.
    pub fn start(command: &'static str, manifest: &Path, globals: Globals) -> Result<Self> {
        let (config, warnings) = Config::discover(&settings_root(manifest))?;
        let ui = UiContext::new(globals.json, globals.verbose, globals.color, &config);

        logging::init(ui.verbose, ui.color)?;
        tracing::debug!(command, manifest = %manifest.display(), "starting");

        if ui.json {
            emit_event(&StartEvent::new(command))?;
            for warning in &warnings {
                emit_event(&WarningEvent::config(command, warning))?;
            }
        } else {
            print_config_warnings(&warnings, ui.color, ui.unicode);
        }

        Ok(Self {
            command,
            config,
            ui,
            started: Instant::now(),
        })
    }

    /// Close the run: in JSON mode errors become events and every run ends
    /// with a `complete` event.
    pub fn finish(&self, outcome: Result<bool>) -> Result<bool> {
        if !self.ui.json {
            return outcome;
        }

        let elapsed = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        match outcome {
            Ok(success) => {
                let event = if success {
                    CompleteEvent::success(self.command)
                } else {
                    CompleteEvent::failure(self.command)
                };
                emit_event(&event.with_duration(elapsed))?;
                Ok(success)
            }
            Err(err) => {
                emit_event(&error_event(self.command, &err))?;
                emit_event(&CompleteEvent::failure(self.command).with_duration(elapsed))?;
                Ok(false)
            }
        }
    }
}

pub(crate) fn error_event<'a>(command: &'a str, err: &anyhow::Error) -> ErrorEvent<'a> {
    let code = err
        .downcast_ref::<DepgenError>()
        .map_or("internal", DepgenError::code);
    let event = ErrorEvent::new(command, code, err.to_string());
    match help_for(err) {
        Some(help) => event.with_help(help),
        None => event,
    }
}

pub(crate) fn help_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<DepgenError>()? {
        DepgenError::Strict { .. } => Some("Run without --strict to treat these as warnings"),
        _ => None,
    }
}
