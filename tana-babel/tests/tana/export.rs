//! Export tests for the Tana Paste format (Markdown → Tana Paste)

use insta::assert_snapshot;
use tana_babel::{markdown_to_outline_paragraphs, FormatRegistry};

const KITCHENSINK: &str = "# Project
Intro with **bold** and _italic_.

## Tasks
1. First
2. Second
   - detail
3. Third

Notes \\& caveats
### Deep
- x
";

#[test]
fn test_kitchensink() {
    assert_snapshot!(markdown_to_outline_paragraphs(KITCHENSINK), @r"
    %%tana%%
    - !! Project
      - Intro with **bold** and __italic__.
      - !! Tasks
        - First
        - Second
          - detail
        - Third
        - Notes & caveats
        - !! Deep
          - x
    ");
}

#[test]
fn test_output_starts_with_preamble() {
    for input in ["", "plain", "# h", "- l", "%%tana%%"] {
        assert!(markdown_to_outline_paragraphs(input).starts_with("%%tana%%\n"));
    }
}

#[test]
fn test_double_conversion_adds_a_second_preamble() {
    let once = markdown_to_outline_paragraphs("# A\n- b");
    let twice = markdown_to_outline_paragraphs(&once);
    assert_eq!(twice, "%%tana%%\n- %%tana%%\n- !! A\n  - b");
}

#[test]
fn test_no_trailing_newline() {
    let out = markdown_to_outline_paragraphs("- a\n- b\n");
    assert!(out.ends_with("- b"));
}

#[test]
fn test_registry_round_trip_matches_function() {
    let registry = FormatRegistry::default();
    let outline = registry
        .parse(KITCHENSINK, "markdown")
        .expect("markdown should parse");
    let paste = registry
        .serialize(&outline, "tana")
        .expect("tana should serialize");
    assert_eq!(paste, markdown_to_outline_paragraphs(KITCHENSINK));
}

#[test]
fn test_json_dump_of_outline() {
    let registry = FormatRegistry::default();
    let outline = registry.parse("# T\n- a", "markdown").unwrap();
    let json = registry.serialize(&outline, "json").unwrap();
    assert_snapshot!(json, @r#"
    {
      "lines": [
        {
          "depth": 0,
          "kind": "heading",
          "level": 1,
          "content": "T"
        },
        {
          "depth": 1,
          "kind": "list_item",
          "content": "a"
        }
      ]
    }
    "#);
}
