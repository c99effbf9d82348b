//! JSON dump of the outline IR
//!
//! Shows exactly how every source line was classified and how deep it was
//! placed, which is what you want when an outline comes out nested wrong.
//!
//! ```json
//! {
//!   "lines": [
//!     { "depth": 0, "kind": "heading", "level": 1, "content": "Title" },
//!     { "depth": 1, "kind": "list_item", "content": "first" }
//!   ]
//! }
//! ```
//!
//! Options:
//! - `pretty` (bool, default `true`): indent the output

use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::ir::nodes::Outline;
use std::collections::HashMap;

/// Format implementation for the JSON outline dump
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl JsonFormat {
    fn to_json(outline: &Outline, pretty: bool) -> Result<String, FormatError> {
        let result = if pretty {
            serde_json::to_string_pretty(outline)
        } else {
            serde_json::to_string(outline)
        };
        result.map_err(|e| FormatError::SerializationError(e.to_string()))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Outline intermediate representation as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
        Self::to_json(outline, true)
    }

    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = true;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = parse_bool_option(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'json' does not support option '{other}'"
                    )))
                }
            }
        }
        Self::to_json(outline, pretty)
    }
}
