// Chunk: docs/chunks/overlay_escaping - Escape user text before it becomes markup

//! The overlay's `<code>` element as plain state.

use crate::escape::escape_html;

/// The read-only `<code>` element that renders the highlighted document.
///
/// `text` is what the element's `textContent` would be; `markup` is its
/// `innerHTML`. [`CodeElement::fill_text`] keeps the two consistent by
/// escaping; a [`Highlighter`](crate::Highlighter) then rewrites `markup` in
/// place, wrapping runs of it in token spans without changing `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeElement {
    text: String,
    markup: String,
}

impl CodeElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the element's content to `text`, escaped.
    ///
    /// This is the only way raw user text enters the markup.
    pub fn fill_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.markup = escape_html(text);
    }

    /// The raw text the element displays.
    pub fn text_content(&self) -> &str {
        &self.text
    }

    /// The element's current markup.
    pub fn inner_html(&self) -> &str {
        &self.markup
    }

    /// Replaces the markup. Callers must preserve the displayed text.
    pub fn set_inner_html(&mut self, markup: String) {
        self.markup = markup;
    }
}
