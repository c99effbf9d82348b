//! Inline span formatting: bold, italic and (optionally) highlight.
//!
//! Markdown allows both `*` and `_` for emphasis. Tana Paste uses `**` for bold
//! and `__` for italic, so:
//!
//! | Markdown              | Tana Paste  |
//! |-----------------------|-------------|
//! | `**b**` or `__b__`    | `**b**`     |
//! | `*i*` or `_i_`        | `__i__`     |
//! | `==h==` (opt-in)      | `^^h^^`     |
//!
//! A span only matches when the character just inside each marker is not
//! whitespace and the character after the closing marker is whitespace,
//! punctuation or end of input. Anything else, like `snake_case_names` or
//! `2 * 3 * 4`, is copied through untouched. The content of a matched span is
//! formatted again, so nested emphasis survives.
//!
//! Bare `http://`/`https://` URLs (up to whitespace or `)`) and `[[references]]`
//! are copied through verbatim, and markers inside them never open or close a
//! span.
//!
//! The scanner is a single left-to-right pass over byte positions. Closing
//! candidates are tabulated once per marker kind by a backward pass, so every
//! opener finds its closer with one lookup and a failed opener costs nothing
//! more. All markers are ASCII, so every position it slices at is a char
//! boundary.

use std::collections::HashMap;
use std::ops::Range;

use super::formatting_rules::FormattingRules;

const BOLD: &str = "**";
const ITALIC: &str = "__";
const HIGHLIGHT: &str = "^^";

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];
const REFERENCE_OPEN: &str = "[[";
const REFERENCE_CLOSE: &str = "]]";

/// A matched span, as byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    content_start: usize,
    content_end: usize,
    end: usize,
}

/// Rewrite emphasis markers in a single line of text.
pub fn format_inline(text: &str, rules: &FormattingRules) -> String {
    let bytes = text.as_bytes();
    let protected = protected_ranges(text);
    let mut closers = Closers::new(text, &protected);
    let mut out = String::with_capacity(text.len() + 4);
    let mut plain_start = 0;
    let mut next_protected = 0;
    let mut i = 0;

    while i < bytes.len() {
        while protected.get(next_protected).is_some_and(|r| r.end <= i) {
            next_protected += 1;
        }
        if let Some(range) = protected.get(next_protected).filter(|r| r.start == i) {
            i = range.end;
            continue;
        }

        let marker = bytes[i];
        let doubled = bytes.get(i + 1) == Some(&marker);

        let (width, target) = match marker {
            b'*' | b'_' if doubled => (2, BOLD),
            b'*' | b'_' => (1, ITALIC),
            b'=' if doubled && rules.convert_highlights => (2, HIGHLIGHT),
            _ => {
                i += 1;
                continue;
            }
        };

        match find_span(text, i, width, &mut closers) {
            Some(span) => {
                out.push_str(&text[plain_start..i]);
                out.push_str(target);
                out.push_str(&format_inline(
                    &text[span.content_start..span.content_end],
                    rules,
                ));
                out.push_str(target);
                i = span.end;
                plain_start = span.end;
            }
            // An unmatched pair stays a pair; it never degrades to two italics.
            None => i += width,
        }
    }

    out.push_str(&text[plain_start..]);
    out
}

/// Byte ranges of bare URLs and `[[references]]`, in order.
fn protected_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    // Once a `[[` has no closing `]]`, no later one can have one either.
    let mut references_possible = true;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &text[i..];

        if references_possible && rest.starts_with(REFERENCE_OPEN) {
            let body = &rest[REFERENCE_OPEN.len()..];
            match body.find(REFERENCE_CLOSE) {
                Some(offset) => {
                    let end = i + REFERENCE_OPEN.len() + offset + REFERENCE_CLOSE.len();
                    ranges.push(i..end);
                    i = end;
                    continue;
                }
                None => references_possible = false,
            }
        }

        if URL_SCHEMES.iter().any(|scheme| rest.starts_with(scheme)) {
            let len = rest
                .find(|c: char| c.is_whitespace() || c == ')')
                .unwrap_or(rest.len());
            ranges.push(i..i + len);
            i += len;
            continue;
        }

        i += 1;
        while i < bytes.len() && !text.is_char_boundary(i) {
            i += 1;
        }
    }

    ranges
}

/// Nearest valid closing marker at or after each position, one table per
/// marker byte and width, built on first use.
struct Closers<'a> {
    text: &'a str,
    shielded: Vec<bool>,
    tables: HashMap<(u8, usize), Vec<Option<usize>>>,
}

impl<'a> Closers<'a> {
    fn new(text: &'a str, protected: &[Range<usize>]) -> Self {
        let mut shielded = vec![false; text.len()];
        for range in protected {
            shielded[range.clone()].fill(true);
        }
        Self {
            text,
            shielded,
            tables: HashMap::new(),
        }
    }

    fn at_or_after(&mut self, pos: usize, marker: u8, width: usize) -> Option<usize> {
        let (text, shielded) = (self.text, &self.shielded);
        let table = self.tables.entry((marker, width)).or_insert_with(|| {
            let mut next = vec![None; text.len() + 1];
            for p in (0..text.len()).rev() {
                next[p] = if !shielded[p] && closes_span(text, p, width, marker) {
                    Some(p)
                } else {
                    next[p + 1]
                };
            }
            next
        });
        table.get(pos).copied().flatten()
    }
}

/// Find the span opened by the `width` marker bytes at `start`.
fn find_span(text: &str, start: usize, width: usize, closers: &mut Closers) -> Option<Span> {
    let marker = text.as_bytes()[start];
    let content_start = start + width;

    let first = text[content_start..].chars().next()?;
    if first.is_whitespace() {
        return None;
    }

    let close = closers.at_or_after(content_start + first.len_utf8(), marker, width)?;
    Some(Span {
        content_start,
        content_end: close,
        end: close + width,
    })
}

/// Whether a closing marker of `width` can start at `close`. Single markers
/// only close on a lone marker; a doubled one closes on the last pair of a run.
fn closes_span(text: &str, close: usize, width: usize, marker: u8) -> bool {
    let bytes = text.as_bytes();
    let Some(run) = bytes.get(close..close + width) else {
        return false;
    };
    if run.iter().any(|&b| b != marker) || close == 0 {
        return false;
    }
    if width == 1 && bytes[close - 1] == marker {
        return false;
    }

    let before = text[..close].chars().next_back();
    let after = text[close + width..].chars().next();

    before.is_some_and(|c| !c.is_whitespace()) && is_closing_boundary(after, marker)
}

fn is_closing_boundary(next: Option<char>, marker: u8) -> bool {
    match next {
        None => true,
        Some(c) if c.is_whitespace() => true,
        Some(c) => c.is_ascii_punctuation() && !is_marker(c) && c != marker as char,
    }
}

fn is_marker(c: char) -> bool {
    c == '*' || c == '_'
}
