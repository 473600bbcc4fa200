//! depgen CLI - matrix-aware dependency list resolver
//!
//! Usage: depgen <COMMAND>
//!
//! Commands:
//!   resolve  Print resolved dependency lists
//!   check    Validate a manifest, report lints and conflicts
//!   matrix   List combinations
//!   version  Show version information

use std::process::ExitCode;

use clap::Parser;
use depgen::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::resolve::ResolveArgs;
use commands::Globals;
use ui::primitives::icon::Icon;
use ui::primitives::text::ColoredText;
use ui::terminal::TerminalCapabilities;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let globals = Globals {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };
    let command = command_name(&cli.command);

    match run(cli.command, globals) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            report_error(command, globals, &err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, globals: Globals) -> anyhow::Result<bool> {
    match command {
        Commands::Resolve {
            config,
            file_keys,
            output,
            matrix,
            merge,
            strict,
            no_parallel,
            policy,
        } => commands::resolve::cmd_resolve(
            ResolveArgs {
                config,
                file_keys,
                output,
                matrix,
                merge,
                strict,
                no_parallel,
                policy,
            },
            globals,
        ),
        Commands::Check {
            config,
            strict,
            policy,
        } => commands::check::cmd_check(config, strict, policy, globals),
        Commands::Matrix {
            config,
            file_key,
            matrix,
        } => commands::matrix::cmd_matrix(config, file_key, matrix, globals),
        Commands::Version => commands::version::cmd_version(globals),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Resolve { .. } => "resolve",
        Commands::Check { .. } => "check",
        Commands::Matrix { .. } => "matrix",
        Commands::Version => "version",
    }
}

/// Errors raised before a session could take over reporting.
fn report_error(command: &str, globals: Globals, err: &anyhow::Error) {
    if globals.json {
        let event = commands::session::error_event(command, err);
        if ui::json::emit_event(&event).is_ok() {
            return;
        }
    }

    let caps = TerminalCapabilities::detect_stderr();
    let color = caps.color(globals.color);
    eprintln!(
        "{} {} {}",
        Icon::Error.colored(color, caps.supports_unicode),
        ColoredText::error("Error:").bold().render(color),
        err
    );
    if let Some(help) = commands::session::help_for(err) {
        eprintln!(
            "{} {}",
            Icon::Arrow.colored(color, caps.supports_unicode),
            help
        );
    }
}
