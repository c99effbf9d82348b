//! Inline formatting through the full conversion.

use tana_babel::formats::markdown::inline::format_inline;
use tana_babel::transforms::markdown_to_tana;
use tana_babel::{markdown_to_outline_paragraphs, FormattingRules};

#[test]
fn test_italic_and_bold_do_not_mix() {
    let out = markdown_to_outline_paragraphs("Mix _italic_ and **bold** text");
    assert_eq!(out, "%%tana%%\n- Mix __italic__ and **bold** text");
}

#[test]
fn test_literal_markers_survive() {
    let out = markdown_to_outline_paragraphs("use snake_case and 2 * 3 = 6");
    assert_eq!(out, "%%tana%%\n- use snake_case and 2 * 3 = 6");
}

#[test]
fn test_nested_emphasis() {
    let rules = FormattingRules::default();
    assert_eq!(
        format_inline("**outer _inner_ outer**", &rules),
        "**outer __inner__ outer**"
    );
    assert_eq!(
        format_inline("_outer **inner** outer_", &rules),
        "__outer **inner** outer__"
    );
}

#[test]
fn test_highlights_follow_rules() {
    let md = "a ==key== point";
    assert_eq!(
        markdown_to_tana(md, &FormattingRules::default()),
        "%%tana%%\n- a ==key== point"
    );
    assert_eq!(
        markdown_to_tana(md, &FormattingRules::default().with_highlights(true)),
        "%%tana%%\n- a ^^key^^ point"
    );
}
