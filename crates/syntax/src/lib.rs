// Chunk: docs/chunks/syntax_highlighting - Tree-sitter markup highlighting

//! overlay-edit-syntax: highlighting for the overlay's `<code>` element.
//!
//! The editor keeps its highlighted view as markup inside a [`CodeElement`].
//! Text always enters that markup escaped; a [`Highlighter`] then wraps runs
//! of it in Prism-style token spans (`<span class="token keyword">`), so any
//! Prism theme stylesheet colors the overlay.
//!
//! # Overview
//!
//! - [`Highlighter`]: the capability the editor consumes. It rewrites markup
//!   in place and accepts new grammars at runtime.
//! - [`TreeSitterHighlighter`]: tree-sitter implementation with built-in
//!   grammars for the common web and systems languages.
//! - [`PlainHighlighter`]: leaves markup escaped but unstyled.
//! - [`LanguageRegistry`]: language ids and aliases to grammars.
//! - [`TokenTheme`]: capture names to token classes.
//!
//! # Example
//!
//! ```ignore
//! use overlay_edit_syntax::{CodeElement, Highlighter, TreeSitterHighlighter};
//!
//! let highlighter = TreeSitterHighlighter::new();
//! let mut code = CodeElement::new();
//! code.fill_text("fn main() {}");
//! highlighter.highlight(&mut code, "rust");
//! assert!(code.inner_html().contains("token keyword"));
//! ```

mod element;
mod error;
mod escape;
mod highlighter;
mod registry;
mod theme;

pub use element::CodeElement;
pub use error::{Result, SyntaxError};
pub use escape::{escape_html, push_escaped, unescape_html};
pub use highlighter::{Highlighter, PlainHighlighter, TreeSitterHighlighter};
pub use registry::{normalize_language_id, LanguageDefinition, LanguageRegistry};
pub use theme::TokenTheme;

/// Re-exported so hosts can build [`LanguageDefinition`]s without a direct
/// tree-sitter dependency.
pub use tree_sitter::Language;
