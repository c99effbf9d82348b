//! URLs and `[[references]]` pass through emphasis rewriting untouched.

use tana_babel::markdown_to_outline_paragraphs;

#[test]
fn test_bare_and_link_target_urls() {
    let out = markdown_to_outline_paragraphs(
        "see https://example.com/_private_/page and [x](https://a.io/*b*/c)",
    );
    assert_eq!(
        out,
        "%%tana%%\n- see https://example.com/_private_/page and [x](https://a.io/*b*/c)"
    );
}

#[test]
fn test_references_in_list_items() {
    let out = markdown_to_outline_paragraphs("- see [[snake_case_node]] *now*");
    assert_eq!(out, "%%tana%%\n- see [[snake_case_node]] __now__");
}
