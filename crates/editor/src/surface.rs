// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
//!
//! The native input surface.
//!
//! In the browser this is the transparent `<textarea>` that receives every
//! keystroke. [`TextArea`] models the parts of its contract the editor relies
//! on: value, selection, scroll offsets and rendered width. Selection updates
//! follow the DOM rules exactly, since the keyboard handlers depend on them:
//!
//! - assigning `value` collapses the selection to the end of the new value,
//! - moving `selection_end` before `selection_start` drags the start along,
//! - moving `selection_start` past `selection_end` pushes the end along,
//! - every offset is clamped to the value's length.

use overlay_edit_buffer::CaretRange;
use overlay_edit_input::ScrollPosition;

/// Read and write access to the native input surface.
pub trait InputSurface {
    /// The surface's current text.
    fn value(&self) -> &str;

    /// Replaces the text, collapsing the selection to the end.
    fn set_value(&mut self, value: &str);

    /// The current selection in char offsets, `start <= end`.
    fn selection(&self) -> CaretRange;

    fn set_selection_start(&mut self, offset: usize);

    fn set_selection_end(&mut self, offset: usize);

    /// Scroll offsets (`scrollLeft`, `scrollTop`).
    fn scroll(&self) -> ScrollPosition;

    /// The surface's rendered width in pixels.
    fn rendered_width(&self) -> f32;
}

/// Headless `<textarea>`.
#[derive(Debug, Clone, Default)]
pub struct TextArea {
    value: String,
    char_len: usize,
    selection: CaretRange,
    scroll: ScrollPosition,
    width: f32,
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface of the given rendered width.
    pub fn with_width(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Updates the rendered width, as after a layout pass.
    pub fn set_rendered_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Records new scroll offsets.
    pub fn set_scroll(&mut self, scroll: ScrollPosition) {
        self.scroll = scroll;
    }

    /// Places a collapsed caret at `offset`.
    pub fn set_caret(&mut self, offset: usize) {
        self.set_selection_end(offset);
        self.set_selection_start(offset);
    }

    /// Selects `[start, end)`.
    pub fn select(&mut self, start: usize, end: usize) {
        self.set_selection_end(end);
        self.set_selection_start(start);
    }

    /// Inserts `text` the way a native keystroke or paste does: the selection
    /// is replaced and the caret lands after the inserted text.
    pub fn insert_text(&mut self, text: &str) {
        let CaretRange { start, end } = self.selection;
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);

        self.value.replace_range(start_byte..end_byte, text);
        let inserted = text.chars().count();
        self.char_len = self.char_len - (end - start) + inserted;

        let caret = start + inserted;
        self.selection = CaretRange::collapsed(caret);
    }

    /// Deletes the selection, or the char before a collapsed caret.
    pub fn delete_backward(&mut self) {
        let CaretRange { start, end } = self.selection;
        if start == end {
            if start == 0 {
                return;
            }
            self.selection = CaretRange::new(start - 1, end);
        }
        self.insert_text("");
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_offset)
            .map(|(byte, _)| byte)
            .unwrap_or(self.value.len())
    }
}

impl InputSurface for TextArea {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
        self.char_len = value.chars().count();
        self.selection = CaretRange::collapsed(self.char_len);
    }

    fn selection(&self) -> CaretRange {
        self.selection
    }

    fn set_selection_start(&mut self, offset: usize) {
        let offset = offset.min(self.char_len);
        self.selection.start = offset;
        if self.selection.end < offset {
            self.selection.end = offset;
        }
    }

    fn set_selection_end(&mut self, offset: usize) {
        let offset = offset.min(self.char_len);
        self.selection.end = offset;
        if self.selection.start > offset {
            self.selection.start = offset;
        }
    }

    fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    fn rendered_width(&self) -> f32 {
        self.width
    }
}
