//! Core data structures for the outline IR.

use serde::Serialize;

/// What a line was in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    Heading { level: usize },
    ListItem,
    Paragraph,
    CodeBlock,
}

impl LineKind {
    pub fn is_heading(&self) -> bool {
        matches!(self, LineKind::Heading { .. })
    }
}

/// One bullet of the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineLine {
    /// Nesting depth in indent units
    pub depth: usize,
    #[serde(flatten)]
    pub kind: LineKind,
    /// Inline-formatted text, without bullet or heading marker
    pub content: String,
}

impl OutlineLine {
    pub fn new(depth: usize, kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            depth,
            kind,
            content: content.into(),
        }
    }
}

/// Represents the root of a converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub lines: Vec<OutlineLine>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutlineLine) {
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineLine> {
        self.lines.iter()
    }

    /// Deepest depth present, or `None` for an empty outline.
    pub fn max_depth(&self) -> Option<usize> {
        self.lines.iter().map(|line| line.depth).max()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineLine;
    type IntoIter = std::slice::Iter<'a, OutlineLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
