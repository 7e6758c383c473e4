// Chunk: docs/chunks/suggestion_popup - Caret-anchored suggestion popup
//!
//! Suggestion popup placement.
//!
//! Following the project's Humble View Architecture, placement is a pure
//! function of the caret coordinates and a few metrics, so it is unit tested
//! without any surface.

use crate::coordinates::CaretCoordinates;

/// Minimum popup width in pixels; matches the stylesheet's `min-width`.
pub const POPUP_MIN_WIDTH: f32 = 300.0;

/// Popup offsets relative to the surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopupPosition {
    pub top: f32,
    pub left: f32,
}

impl PopupPosition {
    pub fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }

    /// Inline style for the popup element.
    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px", self.top, self.left)
    }
}

/// Places the popup one line below the caret.
///
/// The popup keeps the caret's left edge unless that would push it past the
/// surface's right edge, in which case it shifts left by the overflow. When
/// the surface is narrower than the popup there is no position that fits, so
/// the popup stays at the caret. The vertical offset is never clamped.
///
/// # Arguments
/// * `caret` - Caret coordinates relative to the surface
/// * `popup_width` - Popup width, usually [`POPUP_MIN_WIDTH`]
/// * `surface_width` - Rendered width of the input surface
/// * `line_height` - Configured line height
pub fn calculate_popup_position(
    caret: CaretCoordinates,
    popup_width: f32,
    surface_width: f32,
    line_height: f32,
) -> PopupPosition {
    let top = caret.top + line_height;

    let overflow = caret.left + popup_width - surface_width;
    let left = if overflow > 0.0 && surface_width >= popup_width {
        caret.left - overflow
    } else {
        caret.left
    };

    PopupPosition { top, left }
}
