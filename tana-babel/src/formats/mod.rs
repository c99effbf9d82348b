//! Format implementations
//!
//! Each format either reads source text into the outline IR or writes the
//! outline IR out as text.

pub mod json;
pub mod markdown;
pub mod tana;

pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use tana::TanaFormat;
