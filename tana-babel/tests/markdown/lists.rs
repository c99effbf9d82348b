//! List nesting through the full conversion.

use insta::assert_snapshot;
use tana_babel::markdown_to_outline_paragraphs;

#[test]
fn test_list_nesting_by_column() {
    let out =
        markdown_to_outline_paragraphs("- Item 1\n  - Item 1.1\n    - Item 1.1.1\n- Item 2");
    assert_eq!(
        out,
        "%%tana%%\n- Item 1\n  - Item 1.1\n    - Item 1.1.1\n- Item 2"
    );
}

#[test]
fn test_numbered_and_asterisk_markers() {
    let out = markdown_to_outline_paragraphs("1. one\n2. two\n   * sub\n10. ten");
    assert_eq!(out, "%%tana%%\n- one\n- two\n  - sub\n- ten");
}

#[test]
fn test_four_space_indentation_is_one_level() {
    let out = markdown_to_outline_paragraphs("- a\n    - b\n        - c");
    assert_eq!(out, "%%tana%%\n- a\n  - b\n    - c");
}

#[test]
fn test_one_space_child_is_a_sibling() {
    let out = markdown_to_outline_paragraphs("- a\n - b\n   - c");
    assert_eq!(out, "%%tana%%\n- a\n- b\n  - c");
}

#[test]
fn test_list_under_headings() {
    let md = "# Project\n## Tasks\n- write\n  - tests\n- ship";
    assert_snapshot!(markdown_to_outline_paragraphs(md), @r"
    %%tana%%
    - !! Project
      - !! Tasks
        - write
          - tests
        - ship
    ");
}

#[test]
fn test_paragraph_interrupts_list() {
    let out = markdown_to_outline_paragraphs("- a\n  - b\nbreak\n  - c");
    assert_eq!(out, "%%tana%%\n- a\n  - b\n- break\n- c");
}

#[test]
fn test_list_items_are_inline_formatted() {
    let out = markdown_to_outline_paragraphs("- a _soft_ and **hard** point");
    assert_eq!(out, "%%tana%%\n- a __soft__ and **hard** point");
}
