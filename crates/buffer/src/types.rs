// Chunk: docs/chunks/document_buffer - Canonical document text with caret ranges

/// Position in the document as (line, column) where both are 0-indexed.
///
/// Columns are measured in chars, matching the caret offsets reported by the
/// input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A caret or selection range into the document buffer.
///
/// Offsets are 0-based char offsets, inclusive-exclusive. The range is
/// collapsed (a plain caret) when `start == end`. The surface may report a
/// range whose `start` is after its `end` while a selection is being dragged
/// backwards; [`CaretRange::ordered`] normalizes that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretRange {
    pub start: usize,
    pub end: usize,
}

impl CaretRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed range at `offset`.
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns true if the range is a plain caret.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Returns the number of chars covered by the range.
    pub fn len(&self) -> usize {
        let ordered = self.ordered();
        ordered.end - ordered.start
    }

    /// Returns the range with `start <= end`.
    pub fn ordered(&self) -> Self {
        if self.start <= self.end {
            *self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Clamps both ends to `[0, len]`.
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}
