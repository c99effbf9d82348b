//! Fenced code blocks, when enabled, are one bullet and leave nesting alone.

use insta::assert_snapshot;
use tana_babel::transforms::markdown_to_tana;
use tana_babel::FormattingRules;

fn convert(source: &str) -> String {
    markdown_to_tana(source, &FormattingRules::default().with_code_blocks(true))
}

#[test]
fn test_comment_in_fence_is_not_a_heading() {
    let out = convert("# Setup\n```bash\n# install deps\nnpm i\n```\nafter");
    assert_snapshot!(out, @r"
    %%tana%%
    - !! Setup
      - # install deps
    npm i
      - after
    ");
}

#[test]
fn test_fence_inside_list_keeps_list_context() {
    let out = convert("- step one\n  ```\n  make\n  ```\n- step two");
    assert_snapshot!(out, @r"
    %%tana%%
    - step one
      - make
    - step two
    ");
}

#[test]
fn test_fences_are_lines_by_default() {
    let out = markdown_to_tana(
        "# Setup\n```bash\n# install deps\n```\nafter",
        &FormattingRules::default(),
    );
    assert_snapshot!(out, @r"
    %%tana%%
    - !! Setup
      - ```bash
    - !! install deps
      - ```
      - after
    ");
}
