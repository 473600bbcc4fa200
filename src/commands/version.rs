use anyhow::Result;

use super::Globals;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::views::version::render_version;

#[derive(serde::Serialize)]
struct VersionData {
    name: &'static str,
    version: &'static str,
}

pub fn cmd_version(globals: Globals) -> Result<bool> {
    let version = env!("CARGO_PKG_VERSION");
    if globals.json {
        emit_event(&DataEvent::named(
            "version",
            "version",
            VersionData {
                name: "depgen",
                version,
            },
        ))?;
        return Ok(true);
    }

    let color = TerminalCapabilities::detect().color(globals.color);
    print!("{}", render_version(version, color));
    Ok(true)
}
