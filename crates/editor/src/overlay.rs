// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
// Chunk: docs/chunks/scroll_mirroring - Scroll offsets of the input surface
//!
//! The highlighted overlay and the line-number gutter.
//!
//! Both are read-only projections: the overlay of the document text, the
//! gutter of its line count. Neither scrolls on its own; the surface's scroll
//! offsets are mirrored onto them as CSS transforms.

use std::ops::RangeInclusive;

use overlay_edit_input::ScrollPosition;
use overlay_edit_syntax::{CodeElement, Highlighter};

/// CSS class of each gutter entry.
pub const GUTTER_LINE_CLASS: &str = "overlay-edit__lines__line";

/// Transform that keeps the overlay aligned with a scrolled surface.
pub fn overlay_transform(scroll: ScrollPosition) -> String {
    format!("translate3d(-{}px, -{}px, 0)", scroll.left, scroll.top)
}

/// Transform for the gutter, which only follows vertical scroll.
pub fn gutter_transform(scroll: ScrollPosition) -> String {
    format!("translate3d(0, -{}px, 0)", scroll.top)
}

/// The `<pre><code>` layer rendered under the transparent textarea.
#[derive(Debug, Clone, Default)]
pub struct OverlayLayer {
    code: CodeElement,
    transform: Option<String>,
}

impl OverlayLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-renders the layer from `text`.
    ///
    /// The text is escaped into the code element first, then the highlighter
    /// rewrites that markup in place.
    pub fn render(&mut self, text: &str, language: &str, highlighter: &dyn Highlighter) {
        self.code.fill_text(text);
        highlighter.highlight(&mut self.code, language);
    }

    pub fn mirror_scroll(&mut self, scroll: ScrollPosition) {
        self.transform = Some(overlay_transform(scroll));
    }

    pub fn code(&self) -> &CodeElement {
        &self.code
    }

    /// The `<code>` element's markup.
    pub fn markup(&self) -> &str {
        self.code.inner_html()
    }

    /// The `<pre>` element's transform, once the surface has scrolled.
    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }
}

/// The line-number gutter.
///
/// Always displays exactly `1..=line_count`.
#[derive(Debug, Clone)]
pub struct LineGutter {
    line_count: usize,
    transform: Option<String>,
}

impl LineGutter {
    /// Creates a gutter for a single empty line.
    pub fn new() -> Self {
        Self {
            line_count: 1,
            transform: None,
        }
    }

    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// The line numbers on display.
    pub fn numbers(&self) -> RangeInclusive<usize> {
        1..=self.line_count
    }

    /// The gutter's markup: one span per line.
    pub fn markup(&self) -> String {
        self.numbers()
            .map(|n| format!("<span class=\"{}\">{}</span>", GUTTER_LINE_CLASS, n))
            .collect()
    }

    pub fn mirror_scroll(&mut self, scroll: ScrollPosition) {
        self.transform = Some(gutter_transform(scroll));
    }

    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }
}

impl Default for LineGutter {
    fn default() -> Self {
        Self::new()
    }
}
