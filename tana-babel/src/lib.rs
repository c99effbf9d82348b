//! Markdown to Tana Paste conversion
//!
//!     This crate turns Markdown into Tana Paste, the plain-text clipboard format of the Tana
//!     outliner: a `%%tana%%` marker line followed by dash bullets whose nesting is encoded
//!     purely by leading two-space groups.
//!
//!     This is a pure lib: it powers tana-cli but is shell agnostic. No code here reads the
//!     environment, prints, or touches files. Conversion is total; any string converts.
//!
//! Architecture
//!
//!     Markdown and Tana Paste disagree on how nesting is expressed. Markdown uses heading
//!     levels and list indentation, Tana uses one uniform indent unit. Conversion therefore
//!     goes through a small IR (./ir/mod.rs):
//!
//!         Markdown ──classify──▶ block events ──nesting stacks──▶ Outline ──serialize──▶ text
//!
//!     - formats/markdown/parser.rs: per-line classifier (heading, list item, paragraph)
//!     - formats/markdown/inline.rs: bold/italic rewriting inside a line
//!     - common/nesting.rs: the heading-level and list-indent stacks that assign depths
//!     - formats/tana: preamble, indentation, heading marker, ampersand de-escaping
//!     - formats/json: the Outline as JSON, for inspecting classifications
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # Plain-function entry points, chunking
//!     ├── formats
//!     │   ├── markdown            # Markdown → Outline
//!     │   ├── tana                # Outline → Tana Paste
//!     │   └── json                # Outline → JSON
//!     ├── ir                      # Outline IR and block events
//!     └── common                  # Nesting stacks
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs includes them.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod registry;
pub mod transforms;

pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::formatting_rules::FormattingRules;
pub use ir::nodes::{LineKind, Outline, OutlineLine};
pub use registry::FormatRegistry;

/// Convert a Markdown document to Tana Paste using the default rules.
///
/// The output always starts with `"%%tana%%\n"`. Headings become `- !! ` bullets,
/// list items and paragraphs become `- ` bullets, nested two spaces per level.
///
/// ```ignore
/// let paste = tana_babel::markdown_to_outline_paragraphs("# H1\n## H2\ntext");
/// assert_eq!(paste, "%%tana%%\n- !! H1\n  - !! H2\n    - text");
/// ```
pub fn markdown_to_outline_paragraphs(markdown: &str) -> String {
    transforms::markdown_to_tana(markdown, &FormattingRules::default())
}
