use depgen::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

/// One `[WARN]` line per unknown settings key, with the suggestion below it.
pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for warning in warnings {
        out.push_str(&format!("{} {}\n", icon, warning));
        if let Some(suggestion) = &warning.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) {
    eprint!(
        "{}",
        render_config_warnings(warnings, supports_color, supports_unicode)
    );
}
