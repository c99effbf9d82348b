//! Tana Paste format implementation
//!
//! Tana Paste is the plain-text clipboard format understood by the Tana
//! outliner:
//!
//! ```text
//! %%tana%%
//! - !! Heading
//!   - child bullet
//!     - grandchild bullet
//! ```
//!
//! Nesting is encoded only by leading two-space groups. Headings are bullets
//! whose text starts with `!!`. The format is write-only here: nothing parses
//! Tana Paste back, and converting converted output again simply wraps it in a
//! second preamble.

pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Outline;

pub use serializer::{serialize_to_tana, PREAMBLE};

/// Format implementation for Tana Paste
#[derive(Debug, Clone, Copy, Default)]
pub struct TanaFormat;

impl Format for TanaFormat {
    fn name(&self) -> &str {
        "tana"
    }

    fn description(&self) -> &str {
        "Tana Paste outline format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tana"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Ok(serialize_to_tana(outline))
    }
}
