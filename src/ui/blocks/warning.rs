use std::fmt::Display;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `[WARN] <count> <noun>` followed by one indented line per finding.
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    findings: Vec<String>,
}

impl WarningBlock {
    /// Titled by the number of findings, e.g. `3 lint(s)`.
    pub fn counted<T: Display>(noun: &str, findings: &[T]) -> Self {
        Self {
            title: format!("{} {}", findings.len(), noun),
            findings: findings.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::warning(self.title.as_str()).bold();
        let mut out = format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );
        for finding in &self.findings {
            out.push_str("  ");
            out.push_str(finding);
            out.push('\n');
        }
        out
    }
}
