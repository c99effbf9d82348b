//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading source text into an [`Outline`] and
//! writing an [`Outline`] back out.

use crate::error::FormatError;
use crate::ir::nodes::Outline;
use std::collections::HashMap;

/// Trait for outline formats
///
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Format for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, outline: &Outline) -> Result<String, FormatError> {
///         Ok(outline
///             .iter()
///             .map(|line| line.content.to_uppercase())
///             .collect::<Vec<_>>()
///             .join("\n"))
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "markdown", "tana", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → Outline)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (Outline → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into an Outline
    fn parse(&self, _source: &str) -> Result<Outline, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize an Outline into text
    fn serialize(&self, _outline: &Outline) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize an Outline, optionally using extra parameters.
    ///
    /// Formats without options can rely on the default implementation, which
    /// delegates to [`Format::serialize`] and rejects any parameter.
    fn serialize_with_options(
        &self,
        outline: &Outline,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(outline)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean format option (`true`/`false`, `1`/`0`, `yes`/`no`).
pub fn parse_bool_option(key: &str, value: &str) -> Result<bool, FormatError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
