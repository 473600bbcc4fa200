//! NDJSON output for `--json`.
//!
//! Every event is one JSON object on its own stdout line, so consumers can
//! stream `depgen resolve --json` into `jq -c` line by line. Logs and text
//! warnings stay on stderr.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

/// Write `event` to stdout as one NDJSON line.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    write_event(&mut io::stdout().lock(), event)
}

pub fn write_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}
