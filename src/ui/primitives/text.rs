use crossterm::style::{Attribute, Color, ContentStyle};

use crate::ui::theme;

/// Role of a piece of text; views pick a tone, never a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => theme::SUCCESS,
            Tone::Error => theme::ERROR,
            Tone::Warning => theme::WARNING,
            Tone::Info => theme::INFO,
            Tone::Dim => theme::DIM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Option<Tone>,
    bold: bool,
}

impl ColoredText {
    fn toned(text: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::toned(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::toned(text, Some(Tone::Success))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::toned(text, Some(Tone::Error))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::toned(text, Some(Tone::Warning))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::toned(text, Some(Tone::Info))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::toned(text, Some(Tone::Dim))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.tone.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut style = ContentStyle::new();
        style.foreground_color = self.tone.map(Tone::color);
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        style.apply(self.text.as_str()).to_string()
    }
}
