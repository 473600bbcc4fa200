use std::path::PathBuf;

use anyhow::Result;
use depgen::application::{ResolveOptions, ResolveReport};
use depgen::domain::entities::MatrixFilter;
use depgen::domain::value_objects::OutputType;
use depgen::presentation::cli::PolicyArgs;
use depgen::presentation::factory::create_resolve_use_case;
use depgen::DepgenError;

use super::session::{effective_policy, Session};
use super::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::resolve::{render_conflicts, render_resolutions};

/// Arguments of `depgen resolve`.
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub config: PathBuf,
    pub file_keys: Vec<String>,
    pub output: Option<OutputType>,
    pub matrix: Option<MatrixFilter>,
    pub merge: bool,
    pub strict: bool,
    pub no_parallel: bool,
    pub policy: PolicyArgs,
}

pub fn cmd_resolve(args: ResolveArgs, globals: Globals) -> Result<bool> {
    let session = Session::start("resolve", &args.config, globals)?;
    let outcome = run(&session, &args);
    session.finish(outcome)
}

fn run(session: &Session, args: &ResolveArgs) -> Result<bool> {
    let config = &session.config;
    let options = ResolveOptions::new(&args.config)
        .with_file_keys(args.file_keys.clone())
        .with_output(args.output)
        .with_matrix(args.matrix.clone())
        .with_merge(args.merge)
        .with_policy(effective_policy(config, &args.policy))
        .with_parallel(config.resolve.parallel && !args.no_parallel);

    let report = create_resolve_use_case().execute(&options)?;
    let strict = args.strict || config.lint.strict;

    if strict && !report.conflicts.is_empty() {
        report_conflicts(session, &report)?;
        return Err(DepgenError::Strict {
            count: report.conflicts.len(),
        }
        .into());
    }

    if session.ui.json {
        for result in &report.resolutions {
            emit_event(&DataEvent::named("resolved", session.command, result))?;
        }
    } else {
        print!("{}", render_resolutions(&report.resolutions, session.ui.color));
    }
    report_conflicts(session, &report)?;

    Ok(true)
}

fn report_conflicts(session: &Session, report: &ResolveReport) -> Result<()> {
    if session.ui.json {
        for conflict in &report.conflicts {
            emit_event(&DataEvent::named("conflict", session.command, conflict))?;
        }
    } else {
        eprint!(
            "{}",
            render_conflicts(&report.conflicts, session.ui.color, session.ui.unicode)
        );
    }
    Ok(())
}
