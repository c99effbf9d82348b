//! Markdown parsing (Markdown → outline)
//!
//! Pipeline: Markdown string → block events → outline IR.
//!
//! Every line that is not blank is classified as exactly one of heading, list
//! item or paragraph, in that order of precedence. Malformed heading or list
//! syntax simply falls through to the paragraph case, so parsing never fails.
//!
//! With [`FormattingRules::fenced_code_blocks`] enabled, everything between a
//! pair of ```` ``` ```` fence lines is collected into one code block instead,
//! untouched by heading, list or inline rules. An unclosed fence runs to the
//! end of the document.

use super::formatting_rules::FormattingRules;
use super::inline::format_inline;
use crate::common::nesting::events_to_outline;
use crate::ir::events::Event;
use crate::ir::nodes::Outline;

/// Parse a Markdown string into an outline.
pub fn parse_from_markdown(source: &str, rules: &FormattingRules) -> Outline {
    let events = markdown_to_events(source, rules);
    let outline = events_to_outline(events);

    log::debug!(
        "parsed {} outline lines (max depth {:?})",
        outline.len(),
        outline.max_depth()
    );
    outline
}

const FENCE: &str = "```";

/// Classify every non-blank source line into a block event.
pub fn markdown_to_events(source: &str, rules: &FormattingRules) -> Vec<Event> {
    let mut events = Vec::new();
    let mut fenced: Option<Vec<&str>> = None;

    for line in source.split('\n') {
        if rules.fenced_code_blocks {
            let is_fence = line.trim_start().starts_with(FENCE);
            match (fenced.as_mut(), is_fence) {
                (Some(body), false) => {
                    body.push(line);
                    continue;
                }
                (Some(body), true) => {
                    events.extend(code_block(body));
                    fenced = None;
                    continue;
                }
                (None, true) => {
                    fenced = Some(Vec::new());
                    continue;
                }
                (None, false) => {}
            }
        }

        events.extend(classify_line(line, rules));
    }

    if let Some(body) = fenced {
        events.extend(code_block(&body));
    }
    events
}

/// Join the lines of a fenced block. A block with nothing but blank lines
/// yields no event.
fn code_block(body: &[&str]) -> Option<Event> {
    if body.iter().all(|line| line.trim().is_empty()) {
        return None;
    }
    let lines: Vec<&str> = body.iter().map(|line| line.trim()).collect();
    Some(Event::CodeBlock(lines.join("\n")))
}

/// Classify a single source line. Blank lines yield `None`.
pub fn classify_line(line: &str, rules: &FormattingRules) -> Option<Event> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((level, content)) = split_heading(trimmed) {
        return Some(Event::Heading {
            level,
            content: format_inline(content, rules),
        });
    }

    if let Some((column, content)) = split_list_item(line) {
        return Some(Event::ListItem {
            column,
            content: format_inline(content, rules),
        });
    }

    Some(Event::Paragraph(format_inline(trimmed, rules)))
}

/// `#`-run, whitespace, content. Returns the level and the content.
fn split_heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.bytes().take_while(|&b| b == b'#').count();
    if level == 0 {
        return None;
    }

    let rest = &trimmed[level..];
    let content = rest.trim_start();
    if content.len() == rest.len() || content.is_empty() {
        return None;
    }

    Some((level, content))
}

/// Leading whitespace, `-`/`*`/`<digits>.` marker, whitespace, content.
/// Returns the marker's column (in chars) and the content.
fn split_list_item(line: &str) -> Option<(usize, &str)> {
    let line = line.trim_end();
    let body = line.trim_start();
    let column = line[..line.len() - body.len()].chars().count();

    let after_marker = match body.strip_prefix(|c: char| c == '-' || c == '*') {
        Some(rest) => rest,
        None => {
            let digits = body.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                return None;
            }
            body[digits..].strip_prefix('.')?
        }
    };

    let content = after_marker.trim_start();
    if content.len() == after_marker.len() || content.is_empty() {
        return None;
    }

    Some((column, content))
}
