//! Tana Paste format tests
//!
//! Tests for outline → Tana Paste output, chunking and whole-document properties.

mod chunking;
mod export;
mod properties;
