use depgen::domain::entities::ResolvedResult;
use depgen::domain::services::MergeConflict;
use depgen::domain::value_objects::PackageEntry;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::text::ColoredText;

/// `# <file key> [<output type>] <axis>=<value> ...`
pub fn render_resolution_header(result: &ResolvedResult) -> String {
    let mut header = format!("# {} [{}]", result.file_key, result.output_type);
    if !result.combination.is_empty() {
        header.push(' ');
        header.push_str(&result.combination.to_string());
    }
    header
}

/// One section per resolved list: a comment header, then one specifier per
/// line. A group prints as `key:` followed by its specifiers, indented.
pub fn render_resolutions(results: &[ResolvedResult], supports_color: bool) -> String {
    let mut out = String::new();
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&ColoredText::dim(render_resolution_header(result)).render(supports_color));
        out.push('\n');
        for entry in &result.packages {
            match entry {
                PackageEntry::Spec(spec) => {
                    out.push_str(spec.as_str());
                    out.push('\n');
                }
                PackageEntry::Group(group) => {
                    out.push_str(&group.key);
                    out.push_str(":\n");
                    for spec in &group.specs {
                        out.push_str("  ");
                        out.push_str(spec.as_str());
                        out.push('\n');
                    }
                }
            }
        }
    }
    out
}

pub fn render_conflicts(
    conflicts: &[MergeConflict],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if conflicts.is_empty() {
        return String::new();
    }
    WarningBlock::counted("package(s) with conflicting specifiers", conflicts)
        .render(supports_color, supports_unicode)
}
