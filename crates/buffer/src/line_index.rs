// Chunk: docs/chunks/document_buffer - Canonical document text with caret ranges

//! Line index for tracking line boundaries in the document.
//!
//! Maintains an array of line start offsets (in chars) for O(1) line count and
//! O(log n) offset-to-line lookup. The document is replaced wholesale on every
//! update, so the index is rebuilt rather than patched.

/// Tracks line boundaries in a document.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Char offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<usize>,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines.
    ///
    /// A document always has at least one line (even if empty), and a trailing
    /// newline opens one more empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the char offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the char offset of the end of the given line, excluding its
    /// newline. For the last line this equals `total_len`.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(total_len)
        }
    }

    /// Returns the line number containing the given char offset.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }
}
