// Chunk: docs/chunks/document_buffer - Canonical document text with caret ranges

//! Integration tests for realistic editing sequences.
//!
//! These tests verify that the document text and line index stay in sync when
//! a sequence of splices is committed one after another, the way the editor
//! commits tab and bracket insertions.

use overlay_edit_buffer::{CaretRange, Document, Position};

fn commit(doc: &mut Document, range: CaretRange, insert: &str) {
    let next = doc.spliced(range, insert);
    doc.replace(next);
}

#[test]
fn test_type_lines_then_indent_each() {
    let mut doc = Document::from_str("first\nsecond\nthird");

    // Indent every line from the bottom up so earlier offsets stay valid
    for line in (0..doc.line_count()).rev() {
        let start: usize = (0..line)
            .map(|l| doc.line(l).unwrap().chars().count() + 1)
            .sum();
        commit(&mut doc, CaretRange::collapsed(start), "  ");
    }

    assert_eq!(doc.as_str(), "  first\n  second\n  third");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.position_of(10), Position::new(1, 2));
}

#[test]
fn test_bracket_pairs_nest() {
    let mut doc = Document::new();

    // Close characters land first, opens are typed in front of them
    commit(&mut doc, CaretRange::collapsed(0), "}");
    commit(&mut doc, CaretRange::collapsed(0), "{");
    commit(&mut doc, CaretRange::collapsed(1), ")");
    commit(&mut doc, CaretRange::collapsed(1), "(");

    assert_eq!(doc.as_str(), "{()}");
}

#[test]
fn test_replace_selection_spanning_lines() {
    let mut doc = Document::from_str("alpha\nbeta\ngamma\n");
    assert_eq!(doc.line_count(), 4);

    commit(&mut doc, CaretRange::new(3, 13), "");
    assert_eq!(doc.as_str(), "alpmma\n");
    assert_eq!(doc.line_count(), 2);
}

#[test]
fn test_newline_only_content() {
    let mut doc = Document::new();
    commit(&mut doc, CaretRange::collapsed(0), "\n\n\n");
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.position_of(3), Position::new(3, 0));
}
