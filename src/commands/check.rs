use std::path::PathBuf;

use anyhow::Result;
use depgen::application::CheckOptions;
use depgen::presentation::cli::PolicyArgs;
use depgen::presentation::factory::create_check_use_case;
use depgen::DepgenError;
use serde::Serialize;

use super::session::{effective_policy, Session};
use super::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::check::{render_check_header, render_check_report, render_check_summary};

#[derive(Debug, Serialize)]
struct Summary {
    axes: usize,
    blocks: usize,
    files: usize,
    combinations: usize,
    resolutions: usize,
    lints: usize,
    conflicts: usize,
    strict: bool,
}

pub fn cmd_check(
    config: PathBuf,
    strict: bool,
    policy: PolicyArgs,
    globals: Globals,
) -> Result<bool> {
    let session = Session::start("check", &config, globals)?;
    let outcome = run(&session, config, strict, &policy);
    session.finish(outcome)
}

fn run(session: &Session, manifest: PathBuf, strict: bool, args: &PolicyArgs) -> Result<bool> {
    let ui = &session.ui;
    let strict = strict || session.config.lint.strict;
    let policy = effective_policy(&session.config, args);

    if !ui.json && !ui.quiet(&session.config) {
        print!(
            "{}",
            render_check_header(&manifest, policy, strict, ui.color, ui.unicode)
        );
    }

    let options = CheckOptions::new(manifest)
        .with_policy(policy)
        .with_parallel(session.config.resolve.parallel);
    let report = create_check_use_case().execute(&options)?;

    if ui.json {
        for lint in &report.lints {
            emit_event(&DataEvent::named("lint", session.command, lint))?;
        }
        for conflict in &report.conflicts {
            emit_event(&DataEvent::named("conflict", session.command, conflict))?;
        }
        emit_event(&DataEvent::named(
            "summary",
            session.command,
            Summary {
                axes: report.axes,
                blocks: report.blocks,
                files: report.files,
                combinations: report.combinations,
                resolutions: report.resolutions,
                lints: report.lints.len(),
                conflicts: report.conflicts.len(),
                strict,
            },
        ))?;
    } else {
        print!("{}", render_check_report(&report, ui.color, ui.unicode));
        if !ui.quiet(&session.config) {
            print!(
                "{}",
                render_check_summary(&report, strict, ui.color, ui.unicode)
            );
        }
    }

    if strict && !report.is_clean() {
        return Err(DepgenError::Strict {
            count: report.problem_count(),
        }
        .into());
    }
    Ok(true)
}
