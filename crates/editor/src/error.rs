// Chunk: docs/chunks/editor_construction - Construction and registration errors

use overlay_edit_syntax::SyntaxError;
use thiserror::Error;

/// Errors surfaced by [`CodeEditor`](crate::CodeEditor).
///
/// Construction fails as a whole: when `CodeEditor::new` returns one of these,
/// no editor exists. Keyboard, input and scroll handling never fail.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("no target element was given to mount the editor on")]
    MissingTarget,

    #[error("no options were given; pass EditorOptions::default() for the defaults")]
    MissingOptions,

    #[error("failed to inject stylesheet `{id}`")]
    StyleInjection { id: String },

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("grammar registration failed: {0}")]
    Grammar(#[from] SyntaxError),
}

impl EditorError {
    pub fn style_injection(id: impl Into<String>) -> Self {
        Self::StyleInjection { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
