use crate::ui::primitives::text::ColoredText;

pub fn render_version(version: &str, supports_color: bool) -> String {
    format!(
        "{} {}\n{}\n",
        ColoredText::plain("depgen").bold().render(supports_color),
        version,
        ColoredText::dim("Matrix-aware dependency list resolver").render(supports_color)
    )
}
