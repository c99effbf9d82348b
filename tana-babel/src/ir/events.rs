//! Block events produced by the Markdown classifier.

/// A single classified source line, or a fenced block of lines.
///
/// Content is already inline-formatted. Positions are raw source values
/// (heading level, list column); turning them into output depth is the job
/// of the nesting stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `#`-style heading with its level (count of `#`)
    Heading { level: usize, content: String },
    /// Bulleted or numbered list item starting at `column`
    ListItem { column: usize, content: String },
    /// Any other non-blank line
    Paragraph(String),
    /// Body of a fenced code block, lines trimmed and joined with `\n`
    CodeBlock(String),
}
