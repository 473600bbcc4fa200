use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Clean,
    Problems,
    Failed,
}

/// Closing block of a command: outcome title, counts, optional next step.
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    outcome: Outcome,
    stats: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    fn with_outcome(title: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Clean)
    }

    /// Problems were found but do not fail the command.
    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Problems)
    }

    /// Problems were found and the command exits non-zero.
    pub fn failed(title: impl Into<String>) -> Self {
        Self::with_outcome(title, Outcome::Failed)
    }

    pub fn add_stat(&mut self, label: &str, count: usize) {
        self.stats.push(format!("{} {}", count, label));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = match self.outcome {
            Outcome::Clean => (Icon::Success, ColoredText::success(self.title.as_str())),
            Outcome::Problems => (Icon::Warning, ColoredText::warning(self.title.as_str())),
            Outcome::Failed => (Icon::Error, ColoredText::error(self.title.as_str())),
        };

        let mut out = format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );
        if !self.stats.is_empty() {
            out.push_str(&format!("  {}\n", self.stats.join(", ")));
        }
        if let Some(next_step) = &self.next_step {
            out.push_str(&format!(
                "{} {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }
        out
    }
}
