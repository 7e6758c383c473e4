// Chunk: docs/chunks/document_buffer - Canonical document text with caret ranges

//! overlay-edit-buffer: the document model for overlay-edit.
//!
//! This crate provides the single source of truth for an editor instance: the
//! document text, the caret range type used to address it, and a line index
//! for line counting and offset-to-position conversion.
//!
//! # Overview
//!
//! - [`Document`]: the full text, replaced wholesale on every update
//! - [`CaretRange`]: a (start, end) char-offset range, collapsed for a caret
//! - [`Position`]: a (line, column) pair derived from an offset
//!
//! # Example
//!
//! ```
//! use overlay_edit_buffer::{CaretRange, Document, Position};
//!
//! let mut doc = Document::from_str("ab");
//! let next = doc.spliced(CaretRange::collapsed(1), "  ");
//! doc.replace(next);
//! assert_eq!(doc.as_str(), "a  b");
//!
//! doc.replace("fn main() {\n}\n");
//! assert_eq!(doc.line_count(), 3);
//! assert_eq!(doc.position_of(12), Position::new(1, 0));
//! ```

mod document;
mod line_index;
mod types;

pub use document::Document;
pub use line_index::LineIndex;
pub use types::{CaretRange, Position};
