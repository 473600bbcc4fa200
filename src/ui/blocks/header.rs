use std::path::Path;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// `<icon> depgen <command>` followed by `Label: value` lines.
#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    command: &'static str,
    lines: Vec<String>,
}

impl CommandHeader {
    pub fn new(icon: Icon, command: &'static str) -> Self {
        Self {
            icon,
            command,
            lines: Vec::new(),
        }
    }

    /// Every header starts from the manifest it reads.
    pub fn for_manifest(icon: Icon, command: &'static str, manifest: &Path) -> Self {
        Self::new(icon, command).with("Manifest", manifest.display())
    }

    pub fn with(mut self, label: &str, value: impl std::fmt::Display) -> Self {
        self.lines.push(format!("{}: {}", label, value));
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(format!("depgen {}", self.command)).bold();
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title.render(supports_color)
        );
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
