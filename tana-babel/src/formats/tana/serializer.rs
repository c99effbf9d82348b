//! Tana Paste serialization (outline → text)

use crate::common::nesting::INDENT_UNIT;
use crate::ir::nodes::{Outline, OutlineLine};

/// First line of every Tana Paste document.
pub const PREAMBLE: &str = "%%tana%%";

/// Marks a bullet as a heading node.
pub const HEADING_MARKER: &str = "!!";

/// Serialize an outline to Tana Paste.
///
/// The result is the preamble line followed by one bullet per outline line,
/// joined with `\n` and without a trailing newline. An empty outline still
/// produces `"%%tana%%\n"`.
pub fn serialize_to_tana(outline: &Outline) -> String {
    let body: Vec<String> = outline.iter().map(render_line).collect();

    let mut out = String::from(PREAMBLE);
    out.push('\n');
    out.push_str(&body.join("\n"));

    unescape_ampersands(&out)
}

fn render_line(line: &OutlineLine) -> String {
    let indent = " ".repeat(INDENT_UNIT * line.depth);
    if line.kind.is_heading() {
        format!("{indent}- {HEADING_MARKER} {}", line.content)
    } else {
        format!("{indent}- {}", line.content)
    }
}

/// Tana takes `&` literally, so any `\&` escape is undone.
pub fn unescape_ampersands(text: &str) -> String {
    text.replace("\\&", "&")
}
