// Chunk: docs/chunks/document_buffer - Canonical document text with caret ranges

//! The document buffer.
//!
//! [`Document`] holds the full editor text as a single string that is replaced
//! wholesale on every update. Edits are expressed by building the next string
//! with [`Document::spliced`] and handing it back through
//! [`Document::replace`], so there is exactly one write path.

use crate::line_index::LineIndex;
use crate::types::{CaretRange, Position};

/// The canonical text of an editor instance.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    /// Length in chars, cached because caret offsets are char-based.
    char_len: usize,
    line_index: LineIndex,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document holding `text`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Self {
        let mut doc = Self::new();
        doc.replace(text);
        doc
    }

    /// Replaces the entire content.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.char_len = self.text.chars().count();
        self.line_index.rebuild(self.text.chars());
    }

    /// Returns the content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length in chars.
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the number of lines, i.e. the number of pieces produced by
    /// splitting on `'\n'`.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the text of a line without its newline.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = self.line_index.line_start(line)?;
        let end = self.line_index.line_end(line, self.char_len)?;
        Some(&self.text[self.byte_offset(start)..self.byte_offset(end)])
    }

    /// Converts a char offset into a (line, column) position.
    ///
    /// Offsets past the end are clamped to the end of the document.
    pub fn position_of(&self, offset: usize) -> Position {
        let offset = offset.min(self.char_len);
        let line = self.line_index.line_at_offset(offset);
        let line_start = self.line_index.line_start(line).unwrap_or(0);
        Position::new(line, offset - line_start)
    }

    /// Converts a char offset into a byte offset into [`Document::as_str`].
    ///
    /// Offsets past the end map to the end of the text.
    pub fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.text.len())
    }

    /// Returns the text covered by `range`.
    pub fn slice(&self, range: CaretRange) -> &str {
        let range = range.ordered().clamped(self.char_len);
        &self.text[self.byte_offset(range.start)..self.byte_offset(range.end)]
    }

    /// Builds the text that results from replacing `range` with `insert`.
    ///
    /// The document itself is left untouched.
    pub fn spliced(&self, range: CaretRange, insert: &str) -> String {
        let range = range.ordered().clamped(self.char_len);
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end);

        let mut next = String::with_capacity(self.text.len() - (end - start) + insert.len());
        next.push_str(&self.text[..start]);
        next.push_str(insert);
        next.push_str(&self.text[end..]);
        next
    }
}
