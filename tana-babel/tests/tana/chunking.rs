//! Chunking of large conversions.

use tana_babel::markdown_to_outline_paragraphs;
use tana_babel::transforms::{chunk_tana_paste, DEFAULT_CHUNK_SIZE};

fn long_document(items: usize) -> String {
    (0..items)
        .map(|i| format!("- item number {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_chunks_respect_limit_and_keep_order() {
    let paste = markdown_to_outline_paragraphs(&long_document(200));
    let chunks = chunk_tana_paste(&paste, 500);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.starts_with("%%tana%%\n"));
        assert!(chunk.chars().count() <= 500);
    }

    let bodies: Vec<&str> = chunks
        .iter()
        .flat_map(|chunk| chunk.split('\n').skip(1))
        .collect();
    let original: Vec<&str> = paste.split('\n').skip(1).collect();
    assert_eq!(bodies, original);
}

#[test]
fn test_default_limit_keeps_normal_documents_whole() {
    let paste = markdown_to_outline_paragraphs(&long_document(50));
    assert_eq!(chunk_tana_paste(&paste, DEFAULT_CHUNK_SIZE), vec![paste]);
}
