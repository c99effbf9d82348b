//! Markdown format implementation
//!
//! Reads Markdown into the outline IR. Only the line-level structure that an
//! outline can express is recognized; everything else is kept as text.
//!
//! # Element Mapping Table
//!
//! | Markdown                 | Outline line             | Notes                                        |
//! |--------------------------|--------------------------|----------------------------------------------|
//! | Heading (`#` .. `######`)| Heading                  | Nested by open headings, not by level gaps   |
//! | List item (`-`, `*`, `1.`)| List item               | Nested by column deltas; marker dropped      |
//! | Any other line           | Paragraph                | One bullet per source line                   |
//! | Blank line               | (nothing)                | No state change                              |
//! | `**b**` / `__b__`        | `**b**`                  | See [`inline`]                               |
//! | `*i*` / `_i_`            | `__i__`                  |                                              |
//! | `==h==`                  | `^^h^^`                  | Only with `convert_highlights`               |
//! | ```` ``` ```` fenced block | Code block             | Only with `fenced_code_blocks`; one bullet   |
//! | URL, `[[ref]]`           | verbatim                 | Markers inside are not emphasis              |
//!
//! # Lossy Conversions
//!
//! - Ordered list numbering is dropped; every item becomes a plain bullet.
//! - Block quotes, tables and rules are treated as paragraphs. So are code
//!   fences unless `fenced_code_blocks` is set, in which case the block's lines
//!   are trimmed and the fence lines (with their language tag) are dropped.
//! - Multi-line paragraphs become one bullet per line.

pub mod formatting_rules;
pub mod inline;
pub mod parser;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Outline;
use formatting_rules::FormattingRules;

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    rules: FormattingRules,
}

impl MarkdownFormat {
    pub fn new(rules: FormattingRules) -> Self {
        Self { rules }
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown headings, lists and paragraphs"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Outline, FormatError> {
        Ok(parser::parse_from_markdown(source, &self.rules))
    }
}
