use depgen::config::{ColorMode, Config, OutputFormat};
use depgen::presentation::ColorWhen;

use crate::ui::terminal::TerminalCapabilities;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, TerminalCapabilities::detect())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let json = json || config.output.format == OutputFormat::Json;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose: verbose.max(config.output.verbosity.level()),
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Quiet mode suppresses headers and summaries, never package lists.
    pub fn quiet(&self, config: &Config) -> bool {
        self.verbose == 0 && config.output.verbosity == depgen::config::Verbosity::Quiet
    }
}
