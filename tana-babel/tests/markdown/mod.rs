//! Markdown format tests
//!
//! Tests for Markdown → outline classification and nesting.

mod blank_lines;
mod code_blocks;
mod headings;
mod inline;
mod links;
mod lists;
