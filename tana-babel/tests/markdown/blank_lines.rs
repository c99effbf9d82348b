//! Blank lines never produce bullets nor disturb nesting.

use tana_babel::markdown_to_outline_paragraphs;

#[test]
fn test_blank_lines_between_blocks() {
    let dense = markdown_to_outline_paragraphs("# A\n- x\n  - y\n- z\ntext");
    let sparse =
        markdown_to_outline_paragraphs("\n\n# A\n\n\n- x\n\n  - y\n   \n- z\n\t\ntext\n\n");
    assert_eq!(dense, sparse);
}

#[test]
fn test_blank_line_keeps_list_context() {
    let out = markdown_to_outline_paragraphs("- a\n\n  - b");
    assert_eq!(out, "%%tana%%\n- a\n  - b");
}

#[test]
fn test_only_blank_lines() {
    assert_eq!(markdown_to_outline_paragraphs("\n \n\t\n"), "%%tana%%\n");
    assert_eq!(markdown_to_outline_paragraphs(""), "%%tana%%\n");
}
