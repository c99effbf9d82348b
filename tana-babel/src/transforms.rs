//! Functional entry points for conversions
//!
//! These wrap the format implementations in plain functions for callers that
//! do not need a [`FormatRegistry`](crate::FormatRegistry).

use crate::formats::markdown::formatting_rules::FormattingRules;
use crate::formats::markdown::parser::parse_from_markdown;
use crate::formats::tana::serializer::{serialize_to_tana, PREAMBLE};

/// Default upper bound for [`chunk_tana_paste`], in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 90_000;

/// Convert Markdown to Tana Paste with the given inline rules.
///
/// ```ignore
/// let paste = markdown_to_tana("# Title\n- item", &FormattingRules::default());
/// assert_eq!(paste, "%%tana%%\n- !! Title\n  - item");
/// ```
pub fn markdown_to_tana(source: &str, rules: &FormattingRules) -> String {
    let outline = parse_from_markdown(source, rules);
    serialize_to_tana(&outline)
}

/// Split a Tana Paste document into pieces of at most `max_chunk_size`
/// characters.
///
/// Every chunk is itself a valid Tana Paste document starting with the
/// preamble line. Splits only happen between lines, so a single line longer
/// than the limit becomes a chunk of its own. Input that already fits is
/// returned unchanged as the only chunk.
pub fn chunk_tana_paste(paste: &str, max_chunk_size: usize) -> Vec<String> {
    if paste.chars().count() <= max_chunk_size {
        return vec![paste.to_string()];
    }

    let mut lines = paste.split('\n').peekable();
    if lines.peek() == Some(&PREAMBLE) {
        lines.next();
    }

    let header_size = PREAMBLE.chars().count() + 1;
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = vec![PREAMBLE];
    let mut current_size = header_size;

    for line in lines {
        let line_size = line.chars().count() + 1;
        if current_size + line_size > max_chunk_size && current.len() > 1 {
            chunks.push(current.join("\n"));
            current = vec![PREAMBLE];
            current_size = header_size;
        }
        current.push(line);
        current_size += line_size;
    }

    if current.len() > 1 {
        chunks.push(current.join("\n"));
    }

    log::debug!(
        "split {} characters into {} chunks of at most {max_chunk_size}",
        paste.chars().count(),
        chunks.len()
    );
    chunks
}
