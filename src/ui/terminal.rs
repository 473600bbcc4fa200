//! What the attached terminal can show.

use is_terminal::IsTerminal;

use depgen::presentation::ColorWhen;

/// Environment variables set by common CI providers.
const CI_KEYS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TRAVIS",
];

const LOCALE_KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Capabilities of stdout, where lists and headers go.
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    /// Capabilities of stderr, where errors and warnings go.
    pub fn detect_stderr() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
    }

    fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
        let no_color = get_env("NO_COLOR").is_some() || get_env("DEPGEN_NO_COLOR").is_some();

        Self {
            supports_color: is_tty && !dumb && !no_color,
            supports_unicode: !dumb && unicode_locale(&get_env),
            is_ci: CI_KEYS.iter().any(|key| get_env(key).is_some()),
        }
    }

    /// Apply `--color`; `auto` defers to detection.
    pub fn color(&self, flag: Option<ColorWhen>) -> bool {
        match flag {
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Auto) | None => self.supports_color,
        }
    }
}

/// The first locale variable that is set decides; unset means unicode.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    let Some(locale) = LOCALE_KEYS.iter().find_map(|key| get_env(key)) else {
        return true;
    };
    let locale = locale.to_lowercase();
    !(locale == "c" || locale == "posix")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TerminalCapabilities::from_env(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn no_color_wins_over_a_tty() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);

        let c = caps(&[("DEPGEN_NO_COLOR", "1")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn ci_providers_are_recognized() {
        assert!(caps(&[("CI", "true")], true).is_ci);
        assert!(caps(&[("GITHUB_ACTIONS", "true")], false).is_ci);
        assert!(!caps(&[], true).is_ci);
    }

    #[test]
    fn term_dumb_disables_color_and_unicode() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn pipes_never_get_color() {
        assert!(!caps(&[("TERM", "xterm-256color")], false).supports_color);
    }

    #[test]
    fn posix_locale_falls_back_to_ascii() {
        assert!(!caps(&[("LANG", "C")], true).supports_unicode);
        assert!(!caps(&[("LC_ALL", "POSIX"), ("LANG", "en_US.UTF-8")], true).supports_unicode);
        assert!(caps(&[("LANG", "en_US.UTF-8")], true).supports_unicode);
    }

    #[test]
    fn color_flag_overrides_detection() {
        let piped = caps(&[], false);
        assert!(piped.color(Some(ColorWhen::Always)));
        assert!(!piped.color(None));

        let tty = caps(&[], true);
        assert!(!tty.color(Some(ColorWhen::Never)));
        assert!(tty.color(Some(ColorWhen::Auto)));
    }
}
