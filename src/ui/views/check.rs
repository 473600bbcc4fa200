use std::path::Path;

use depgen::application::CheckReport;
use depgen::domain::value_objects::{FallbackPolicy, MatchMode, ResolvePolicy};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::resolve::render_conflicts;

pub fn render_check_header(
    manifest: &Path,
    policy: ResolvePolicy,
    strict: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::for_manifest(Icon::Check, "check", manifest);
    let fallback = match policy.fallback {
        FallbackPolicy::Optional => "optional",
        FallbackPolicy::Required => "required",
    };
    let match_mode = match policy.match_mode {
        MatchMode::Exact => "exact",
        MatchMode::Glob => "glob",
    };
    header = header.with("Policy", format!("fallback={}, match={}", fallback, match_mode));
    if strict {
        header = header.with("Strict", "failing on lints and conflicts");
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    if !report.lints.is_empty() {
        out.push_str(
            &WarningBlock::counted("lint(s)", &report.lints).render(supports_color, supports_unicode),
        );
    }

    out.push_str(&render_conflicts(
        &report.conflicts,
        supports_color,
        supports_unicode,
    ));
    out
}

pub fn render_check_summary(
    report: &CheckReport,
    strict: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if report.is_clean() {
        ResultSummary::success("Manifest OK")
    } else if strict {
        ResultSummary::failed(format!(
            "Check FAILED: {} problem(s)",
            report.problem_count()
        ))
    } else {
        ResultSummary::partial(format!(
            "Manifest valid with {} problem(s)",
            report.problem_count()
        ))
    };

    summary.add_stat("axes", report.axes);
    summary.add_stat("blocks", report.blocks);
    summary.add_stat("file keys", report.files);
    summary.add_stat("combinations", report.combinations);
    summary.add_stat("lists resolved", report.resolutions);
    if report.is_clean() {
        summary.with_next_step("Run `depgen resolve` to print the lists");
    }

    summary.render(supports_color, supports_unicode)
}
