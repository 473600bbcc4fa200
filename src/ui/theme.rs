//! Palette and glyphs for depgen's text output.
//!
//! Views never name a `Color` or a glyph directly; they go through
//! [`ColoredText`](crate::ui::primitives::text::ColoredText) and
//! [`Icon`](crate::ui::primitives::icon::Icon), which read from here.

use crossterm::style::Color;

pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const INFO: Color = Color::Cyan;
pub const DIM: Color = Color::DarkGrey;

/// A glyph and the ASCII stand-in used when the locale cannot show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
    pub color: Color,
}

impl Glyph {
    pub const fn pick(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub const OK: Glyph = Glyph {
    unicode: "✓",
    ascii: "[OK]",
    color: SUCCESS,
};

pub const FAIL: Glyph = Glyph {
    unicode: "✗",
    ascii: "[FAIL]",
    color: ERROR,
};

pub const WARN: Glyph = Glyph {
    unicode: "⚠",
    ascii: "[WARN]",
    color: WARNING,
};

pub const HINT: Glyph = Glyph {
    unicode: "↳",
    ascii: "[>]",
    color: DIM,
};

// Command headers
pub const CHECK: Glyph = Glyph {
    unicode: "🔍",
    ascii: "[CHECK]",
    color: INFO,
};

pub const MATRIX: Glyph = Glyph {
    unicode: "▦",
    ascii: "[MATRIX]",
    color: INFO,
};
