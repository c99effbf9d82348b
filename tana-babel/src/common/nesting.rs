//! Converts a flat block event stream into a depth-annotated outline.
//!
//! # The High-Level Concept
//!
//! Markdown encodes nesting two different ways: headings by their level
//! (`#`, `##`, ...) and list items by their leading whitespace. The outline
//! format only knows one thing, the number of two-space indent units in front
//! of a bullet. Two independent stacks translate between the two:
//!
//! - [`HeadingStack`] holds the levels of the currently open headings. It is
//!   strictly increasing from bottom to top, so its length is the depth of
//!   everything written under the innermost heading.
//! - [`ListIndentStack`] holds the source columns at which the currently open
//!   list levels began. Its length (minus one) is the list's own contribution
//!   to the depth, added on top of the heading depth.
//!
//! # The Algorithm
//!
//! 1. **Heading**: the heading is written at the depth it closes down to,
//!    i.e. the number of open headings with a level strictly below its own.
//!    Those at or above its level are popped, its level is pushed and the list
//!    stack is cleared.
//! 2. **List item**: list levels starting right of the item's column are
//!    popped. The column is pushed only when the stack is empty or the column
//!    sits at least one indent unit right of the top. The item is written at
//!    heading depth + list depth - 1.
//! 3. **Paragraph**: the list stack is cleared and the paragraph is written
//!    at the heading depth.
//! 4. **Code block**: neither stack changes. The block is written one level
//!    below the innermost open list item, or at the heading depth when no
//!    list is open.
//!
//! Heading levels need not be contiguous: `#` followed by `###` nests by one,
//! because depth counts open headings, not the numeric gap. Irregular list
//! indentation is normalized the same way, by stack depth rather than by
//! absolute column.
//!
//! Example:
//! ```text
//! # A             depth 0   headings [1]
//! ### B           depth 1   headings [1, 3]
//! - item          depth 2   lists [0]
//!    - child      depth 3   lists [0, 3]
//!   - sibling     depth 3   lists [0, 2]
//! ## C            depth 1   headings [1, 2], lists []
//! ```

use crate::ir::events::Event;
use crate::ir::nodes::{LineKind, Outline, OutlineLine};

/// Width of one indent unit, in source columns and in output spaces.
pub const INDENT_UNIT: usize = 2;

/// Levels of the currently open headings, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingStack {
    levels: Vec<usize>,
}

impl HeadingStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth of content written under the innermost open heading.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Open a heading at `level` and return the depth the heading line itself
    /// is written at.
    pub fn open(&mut self, level: usize) -> usize {
        let closed = self.levels.iter().filter(|&&open| open >= level).count();
        let depth = self.levels.len() - closed;

        while self.levels.last().is_some_and(|&top| top >= level) {
            self.levels.pop();
        }
        self.levels.push(level);

        depth
    }

    pub fn levels(&self) -> &[usize] {
        &self.levels
    }
}

/// Source columns at which the currently open list levels began.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListIndentStack {
    columns: Vec<usize>,
}

impl ListIndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a list item starting at `column` and return the list's
    /// contribution to its depth.
    pub fn enter(&mut self, column: usize) -> usize {
        while self.columns.last().is_some_and(|&top| top > column) {
            self.columns.pop();
        }

        let deeper = match self.columns.last() {
            None => true,
            Some(&top) => column >= top + INDENT_UNIT,
        };
        if deeper {
            self.columns.push(column);
        }

        self.columns.len().saturating_sub(1)
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

/// Feeds block events through both stacks, collecting outline lines.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    headings: HeadingStack,
    lists: ListIndentStack,
    outline: Outline,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: Event) {
        let line = match event {
            Event::Heading { level, content } => {
                let depth = self.headings.open(level);
                self.lists.clear();
                OutlineLine::new(depth, LineKind::Heading { level }, content)
            }
            Event::ListItem { column, content } => {
                let list_depth = self.lists.enter(column);
                let depth = self.headings.depth() + list_depth;
                OutlineLine::new(depth, LineKind::ListItem, content)
            }
            Event::Paragraph(content) => {
                self.lists.clear();
                OutlineLine::new(self.headings.depth(), LineKind::Paragraph, content)
            }
            Event::CodeBlock(content) => {
                let depth = self.headings.depth() + self.lists.columns().len();
                OutlineLine::new(depth, LineKind::CodeBlock, content)
            }
        };

        log::trace!("{:?} at depth {}: {}", line.kind, line.depth, line.content);
        self.outline.push(line);
    }

    pub fn finish(self) -> Outline {
        self.outline
    }
}

/// Convert a block event stream into an outline.
pub fn events_to_outline<I>(events: I) -> Outline
where
    I: IntoIterator<Item = Event>,
{
    let mut builder = OutlineBuilder::new();
    for event in events {
        builder.push_event(event);
    }
    builder.finish()
}
