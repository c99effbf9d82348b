//! Intermediate Representation (IR) for outline documents.
//!
//! Markdown is read into a flat stream of block [`events`], which
//! `common::nesting` turns into an [`nodes::Outline`]: one line per emitted
//! bullet, already carrying its depth. Every output format serializes the
//! outline, never the events.

pub mod events;
pub mod nodes;
