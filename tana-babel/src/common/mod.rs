//! Format-agnostic conversion code shared by all outline formats.

pub mod nesting;
