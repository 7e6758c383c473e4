// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
//!
//! overlay-edit: a code editor made of a transparent textarea laid over a
//! syntax-highlighted `<pre><code>` block.
//!
//! The user types into the textarea; the editor keeps the overlay, the line
//! gutter and an optional suggestion popup in step with it. Everything here is
//! plain state: a browser host forwards DOM events to [`CodeEditor`] and
//! applies the resulting markup, transforms and class changes, while tests
//! drive the same API directly.
//!
//! # Architecture
//!
//! - [`SyncEngine`] owns the document and re-renders the overlay on every
//!   write. Host notifications and line recounts are deferred to the next
//!   tick through a [`TaskQueue`].
//! - [`KeyboardInterceptor`] runs each keydown through an ordered chain of
//!   [`KeyHandler`]s (suggestion navigation, Tab, self-closing brackets).
//! - [`SuggestionPopup`] holds host-supplied candidates and the selection;
//!   [`calculate_popup_position`] places it under the caret.
//! - [`Presentation`] derives element classes from the options and diffs
//!   them on change.
//!
//! # Example
//!
//! ```ignore
//! use overlay_edit::*;
//! use std::rc::Rc;
//!
//! let mut styles = StyleSheets::new();
//! let mut editor = CodeEditor::new(
//!     Some(EditorTarget::new("fn main() {}")),
//!     Some(EditorOptions::from_json(r#"{"language": "rust"}"#)?),
//!     Collaborators::new(
//!         Rc::new(TreeSitterHighlighter::new()),
//!         Box::new(MonospaceResolver::default()),
//!         &mut styles,
//!     ),
//! )?;
//!
//! let response = editor.handle_keydown(&KeyEvent::plain(Key::Tab));
//! assert!(response.prevent_default);
//! editor.run_deferred();
//! ```

mod context;
mod coordinates;
mod editor;
mod error;
mod interceptor;
mod options;
mod overlay;
mod popup_layout;
mod presentation;
mod styles;
mod suggestions;
mod surface;
mod sync;
mod task_queue;

pub use context::KeyContext;
pub use coordinates::{CaretCoordinates, CoordinateResolver, MonospaceResolver, SURFACE_PADDING};
pub use editor::{CodeEditor, Collaborators, EditorTarget, SelectCallback, UpdateCallback};
pub use error::{EditorError, Result};
pub use interceptor::{close_character, closing_pair, Handled, KeyHandler, KeyboardInterceptor};
pub use options::{EditorOptions, ThemeOptions, DEFAULT_LANGUAGE, DEFAULT_TAB_SIZE};
pub use overlay::{gutter_transform, overlay_transform, LineGutter, OverlayLayer, GUTTER_LINE_CLASS};
pub use popup_layout::{calculate_popup_position, PopupPosition, POPUP_MIN_WIDTH};
pub use presentation::{
    language_class, Change, ElementState, Part, Presentation, PresentationChange, EDITOR_CLASS,
};
pub use styles::{
    StyleInjector, StyleSheet, StyleSheets, DEFAULT_THEME_CSS, DEFAULT_THEME_ID, EDITOR_CSS,
    EDITOR_STYLE_ID,
};
pub use suggestions::{Candidate, Direction, PopupState, SuggestionPopup};
pub use surface::{InputSurface, TextArea};
pub use sync::SyncEngine;
pub use task_queue::{DeferredTask, TaskQueue};

pub use overlay_edit_buffer::{CaretRange, Document, Position};
pub use overlay_edit_input::{EventResponse, Key, KeyEvent, Modifiers, ScrollPosition};
pub use overlay_edit_syntax::{
    escape_html, unescape_html, CodeElement, Highlighter, Language, LanguageDefinition,
    PlainHighlighter, SyntaxError, TreeSitterHighlighter,
};
