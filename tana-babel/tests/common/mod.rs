//! Tests for the event stream -> outline nesting.

use tana_babel::common::nesting::events_to_outline;
use tana_babel::ir::events::Event;
use tana_babel::ir::nodes::*;

fn heading(level: usize, text: &str) -> Event {
    Event::Heading {
        level,
        content: text.to_string(),
    }
}

fn item(column: usize, text: &str) -> Event {
    Event::ListItem {
        column,
        content: text.to_string(),
    }
}

#[test]
fn test_mixed_event_stream() {
    let outline = events_to_outline(vec![
        heading(1, "Title"),
        Event::Paragraph("Intro".to_string()),
        heading(2, "Section"),
        item(0, "one"),
        item(2, "one.one"),
        item(0, "two"),
        heading(1, "Next"),
        Event::Paragraph("Body".to_string()),
    ]);

    let expected = vec![
        OutlineLine::new(0, LineKind::Heading { level: 1 }, "Title"),
        OutlineLine::new(1, LineKind::Paragraph, "Intro"),
        OutlineLine::new(1, LineKind::Heading { level: 2 }, "Section"),
        OutlineLine::new(2, LineKind::ListItem, "one"),
        OutlineLine::new(3, LineKind::ListItem, "one.one"),
        OutlineLine::new(2, LineKind::ListItem, "two"),
        OutlineLine::new(0, LineKind::Heading { level: 1 }, "Next"),
        OutlineLine::new(1, LineKind::Paragraph, "Body"),
    ];

    assert_eq!(outline.lines, expected);
}

#[test]
fn test_empty_event_stream() {
    let outline = events_to_outline(Vec::new());
    assert!(outline.is_empty());
}

#[test]
fn test_list_before_any_heading_starts_at_zero() {
    let outline = events_to_outline(vec![item(6, "deep first"), item(8, "deeper")]);
    let depths: Vec<usize> = outline.iter().map(|line| line.depth).collect();
    assert_eq!(depths, vec![0, 1]);
}
