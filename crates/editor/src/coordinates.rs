// Chunk: docs/chunks/suggestion_popup - Caret-anchored suggestion popup
//!
//! Caret pixel coordinates.
//!
//! The popup is placed relative to the caret, so the editor needs the pixel
//! position of a char offset inside the input surface. In a browser this is
//! measured with a mirror element; [`MonospaceResolver`] computes it from
//! fixed metrics, which is exact for the monospace fonts the editor styles
//! its surface with.

use overlay_edit_buffer::Document;
use unicode_width::UnicodeWidthStr;

use crate::options::ThemeOptions;
use crate::surface::InputSurface;

/// Caret position in pixels, relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CaretCoordinates {
    pub top: f32,
    pub left: f32,
}

impl CaretCoordinates {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// Maps a char offset in the surface to pixel coordinates.
pub trait CoordinateResolver {
    fn resolve(&self, surface: &dyn InputSurface, offset: usize) -> CaretCoordinates;
}

/// Fixed-metrics resolver for monospace text.
///
/// Columns are measured in terminal cells via `unicode-width`, so wide
/// characters advance the caret by two cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceResolver {
    /// Width of one cell
    pub char_width: f32,
    /// Height of one line
    pub line_height: f32,
    /// Inner padding of the surface, applied on both axes
    pub padding: f32,
}

/// Padding the bundled stylesheet gives the textarea and the overlay.
pub const SURFACE_PADDING: f32 = 10.0;

/// Advance of a monospace glyph relative to the font size.
const MONOSPACE_ADVANCE_RATIO: f32 = 0.6;

impl MonospaceResolver {
    pub fn new(char_width: f32, line_height: f32, padding: f32) -> Self {
        Self {
            char_width,
            line_height,
            padding,
        }
    }

    /// Derives metrics from the configured font size and line height.
    pub fn from_theme(theme: &ThemeOptions) -> Self {
        Self::new(
            theme.font_size * MONOSPACE_ADVANCE_RATIO,
            theme.line_height,
            SURFACE_PADDING,
        )
    }
}

impl Default for MonospaceResolver {
    fn default() -> Self {
        Self::from_theme(&ThemeOptions::default())
    }
}

impl CoordinateResolver for MonospaceResolver {
    fn resolve(&self, surface: &dyn InputSurface, offset: usize) -> CaretCoordinates {
        let doc = Document::from_str(surface.value());
        let position = doc.position_of(offset);

        let line = doc.line(position.line).unwrap_or("");
        let col_byte = line
            .char_indices()
            .nth(position.col)
            .map(|(byte, _)| byte)
            .unwrap_or(line.len());
        let cells = line[..col_byte].width();

        CaretCoordinates {
            top: self.padding + position.line as f32 * self.line_height,
            left: self.padding + cells as f32 * self.char_width,
        }
    }
}
