use crossterm::style::Stylize;

use crate::ui::theme::{self, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Check,
    Matrix,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => theme::OK,
            Icon::Error => theme::FAIL,
            Icon::Warning => theme::WARN,
            Icon::Arrow => theme::HINT,
            Icon::Check => theme::CHECK,
            Icon::Matrix => theme::MATRIX,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.glyph();
        let s = glyph.pick(supports_unicode);
        if supports_color {
            s.with(glyph.color).to_string()
        } else {
            s.to_string()
        }
    }
}
