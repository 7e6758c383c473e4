// Chunk: docs/chunks/editor_options - Editor options with JSON defaults
//!
//! Editor configuration.
//!
//! Hosts usually hand options over as a JSON object, so the types deserialize
//! with camelCase keys and every key is optional:
//!
//! ```ignore
//! let options = EditorOptions::from_json(r#"{"language": "js", "lineNumbers": true}"#)?;
//! assert_eq!(options.tab_size, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default language when none is configured.
pub const DEFAULT_LANGUAGE: &str = "html";

/// Default number of spaces inserted by the Tab key.
pub const DEFAULT_TAB_SIZE: usize = 2;

/// Options accepted by [`CodeEditor::new`](crate::CodeEditor::new).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorOptions {
    /// Language id used to pick the highlighting grammar
    pub language: String,
    /// Right-to-left text direction
    pub rtl: bool,
    /// Spaces inserted per Tab press
    pub tab_size: usize,
    /// Leave the browser's spellcheck/autocorrect/autocapitalize on
    pub enable_autocorrect: bool,
    /// Show the line-number gutter
    pub line_numbers: bool,
    /// Inject the bundled token theme
    pub default_theme: bool,
    /// Soft-wrap long lines
    pub word_wrap: bool,
    /// Allow the host to show the suggestion popup
    pub auto_suggestions: bool,
    /// Metrics used to place the suggestion popup
    pub theme_options: ThemeOptions,
    /// Where stylesheets are injected; `None` means the document head
    pub style_parent: Option<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            rtl: false,
            tab_size: DEFAULT_TAB_SIZE,
            enable_autocorrect: false,
            line_numbers: false,
            default_theme: true,
            word_wrap: false,
            auto_suggestions: false,
            theme_options: ThemeOptions::default(),
            style_parent: None,
        }
    }
}

impl EditorOptions {
    /// Parses options from a JSON object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        Ok(options.normalized())
    }

    /// Replaces values that would leave the editor unusable with defaults.
    ///
    /// An empty language falls back to `html` and a zero tab size to 2.
    pub fn normalized(mut self) -> Self {
        if self.language.trim().is_empty() {
            self.language = DEFAULT_LANGUAGE.to_string();
        }
        if self.tab_size == 0 {
            self.tab_size = DEFAULT_TAB_SIZE;
        }
        self
    }
}

/// Text metrics the popup placement depends on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeOptions {
    pub line_height: f32,
    pub font_size: f32,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            font_size: 13.0,
        }
    }
}
