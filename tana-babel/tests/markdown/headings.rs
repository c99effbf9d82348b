//! Heading nesting through the full conversion.

use insta::assert_snapshot;
use tana_babel::markdown_to_outline_paragraphs;

#[test]
fn test_heading_levels_become_nested_bullets() {
    let out = markdown_to_outline_paragraphs("# H1\n## H2\n### H3\n Text under H3");
    assert_eq!(
        out,
        "%%tana%%\n- !! H1\n  - !! H2\n    - !! H3\n      - Text under H3"
    );
}

#[test]
fn test_same_level_heading_resets_depth() {
    let md = "# H1\ncontent\n## H2\nmore\n# H1 again\nafter";
    assert_snapshot!(markdown_to_outline_paragraphs(md), @r"
    %%tana%%
    - !! H1
      - content
      - !! H2
        - more
    - !! H1 again
      - after
    ");
}

#[test]
fn test_heading_level_gap_nests_by_one() {
    let out = markdown_to_outline_paragraphs("# Top\n### Skipped a level\nbody");
    assert_eq!(
        out,
        "%%tana%%\n- !! Top\n  - !! Skipped a level\n    - body"
    );
}

#[test]
fn test_shallower_heading_after_gap() {
    let out = markdown_to_outline_paragraphs("# A\n### C\n## B\ntext");
    assert_eq!(out, "%%tana%%\n- !! A\n  - !! C\n  - !! B\n    - text");
}

#[test]
fn test_text_before_first_heading_is_top_level() {
    let out = markdown_to_outline_paragraphs("preface\n## Section\nbody");
    assert_eq!(out, "%%tana%%\n- preface\n- !! Section\n  - body");
}

#[test]
fn test_heading_content_is_inline_formatted() {
    let out = markdown_to_outline_paragraphs("## The *real* __deal__");
    assert_eq!(out, "%%tana%%\n- !! The __real__ **deal**");
}
