use std::path::Path;

use depgen::application::MatrixReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_matrix_header(
    manifest: &Path,
    file_key: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::for_manifest(Icon::Matrix, "matrix", manifest);
    if let Some(key) = file_key {
        header = header.with("File key", key);
    }
    header.render(supports_color, supports_unicode)
}

/// Axes with their values, then every combination on its own line.
pub fn render_matrix(report: &MatrixReport, supports_color: bool) -> String {
    let mut out = String::new();

    out.push_str(&ColoredText::info("Axes").bold().render(supports_color));
    out.push('\n');
    if report.axes.is_empty() {
        out.push_str(&format!("  {}\n", ColoredText::dim("(none)").render(supports_color)));
    }
    for (name, values) in &report.axes {
        let values: Vec<String> = values.iter().map(ToString::to_string).collect();
        out.push_str(&format!("  {}: {}\n", name, values.join(", ")));
    }

    out.push_str(
        &ColoredText::info(format!("Combinations ({})", report.combinations.len()))
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    for combination in &report.combinations {
        if combination.is_empty() {
            out.push_str(&format!("  {}\n", ColoredText::dim("(empty)").render(supports_color)));
        } else {
            out.push_str(&format!("  {}\n", combination));
        }
    }
    out
}
