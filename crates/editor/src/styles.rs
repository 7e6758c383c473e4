// Chunk: docs/chunks/style_injection - Editor and theme stylesheets
//!
//! Stylesheets and their injection.
//!
//! The editor only works if the textarea and the overlay share exact
//! metrics, so its structural stylesheet is mandatory: construction fails
//! when it cannot be injected. The token theme is optional.

/// Id of the structural stylesheet.
pub const EDITOR_STYLE_ID: &str = "overlay-edit-editor";

/// Id of the bundled token theme.
pub const DEFAULT_THEME_ID: &str = "theme-default";

/// Structural stylesheet: stacks the transparent textarea on the overlay.
pub const EDITOR_CSS: &str = r#"
.overlay-edit {
  position: absolute;
  width: 100%;
  height: 100%;
  overflow: hidden;
}

.overlay-edit, .overlay-edit * {
  box-sizing: border-box;
}

.overlay-edit__pre {
  pointer-events: none;
  z-index: 3;
  overflow: hidden;
}

.overlay-edit__textarea {
  background: none;
  border: none;
  color: transparent;
  caret-color: #111;
  z-index: 2;
  resize: none;
  outline: none;
  -webkit-appearance: none;
}

.overlay-edit--has-line-numbers .overlay-edit__flatten {
  width: calc(100% - 40px);
  left: 40px;
}

.overlay-edit__flatten {
  padding: 10px;
  font-size: 13px;
  line-height: 20px;
  white-space: pre;
  position: absolute;
  top: 0;
  left: 0;
  overflow: auto;
  margin: 0 !important;
  outline: none;
  text-align: left;
  font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, Courier, monospace;
}

.overlay-edit__flatten.word-wrap {
  white-space: pre-wrap;
  word-break: break-word;
}

.overlay-edit--has-line-numbers:before {
  content: '';
  position: absolute;
  left: 0;
  top: 0;
  width: 40px;
  height: 100%;
  background: #eee;
  z-index: 1;
}

.overlay-edit__lines {
  padding: 10px 4px;
  font-size: 12px;
  line-height: 20px;
  font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, Courier, monospace;
  position: absolute;
  left: 0;
  top: 0;
  width: 40px;
  height: 100%;
  text-align: right;
  color: #999;
  z-index: 2;
}

.overlay-edit__lines__line {
  display: block;
}

.overlay-edit__auto-suggestions-list {
  position: absolute;
  min-width: 300px;
  max-height: 200px;
  overflow-y: auto;
  z-index: 4;
  background: #fff;
  border: 1px solid #ddd;
  font-size: 13px;
}

.overlay-edit__auto-suggestions-list ul {
  list-style: none;
  margin: 0;
  padding: 0;
}

.overlay-edit__auto-suggestions-list li {
  padding: 2px 8px;
  cursor: pointer;
}

.overlay-edit__auto-suggestions-list li.selected {
  background: #0050a0;
  color: #fff;
}

.overlay-edit__auto-suggestions-list .description {
  margin-left: 12px;
  opacity: 0.6;
}
"#;

/// Token theme for the `token` spans the highlighter emits.
pub const DEFAULT_THEME_CSS: &str = r#"
.overlay-edit {
  background: #fff;
  color: #4f559c;
}

.overlay-edit .token.punctuation { color: #4a4a4a; }
.overlay-edit .token.keyword { color: #8500ff; }
.overlay-edit .token.operator { color: #ff5598; }
.overlay-edit .token.string { color: #41ad8f; }
.overlay-edit .token.comment { color: #9badb7; }
.overlay-edit .token.function { color: #8500ff; }
.overlay-edit .token.boolean { color: #8500ff; }
.overlay-edit .token.number { color: #8500ff; }
.overlay-edit .token.selector { color: #8500ff; }
.overlay-edit .token.property { color: #8500ff; }
.overlay-edit .token.tag { color: #8500ff; }
.overlay-edit .token.attr-value { color: #8500ff; }
.overlay-edit .token.attr-name { color: #4f559c; }
.overlay-edit .token.class-name { color: #b8860b; }
.overlay-edit .token.builtin { color: #d35400; }
.overlay-edit .token.constant { color: #d35400; }
.overlay-edit .token.macro { color: #b5179e; }
"#;

/// Injects CSS text into the host document.
pub trait StyleInjector {
    /// Injects `css` under `parent` (the document head when `None`).
    ///
    /// Returns false if the stylesheet could not be attached. A stylesheet
    /// whose `id` is already present counts as injected.
    fn inject(&mut self, css: &str, id: Option<&str>, parent: Option<&str>) -> bool;
}

/// A stylesheet that has been injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub id: Option<String>,
    pub parent: Option<String>,
    pub css: String,
}

/// Headless [`StyleInjector`] that records stylesheets.
#[derive(Debug, Clone)]
pub struct StyleSheets {
    sheets: Vec<StyleSheet>,
    attached: bool,
}

impl StyleSheets {
    /// A document that accepts stylesheets.
    pub fn new() -> Self {
        Self {
            sheets: Vec::new(),
            attached: true,
        }
    }

    /// A document with nowhere to attach stylesheets; every injection fails.
    pub fn detached() -> Self {
        Self {
            sheets: Vec::new(),
            attached: false,
        }
    }

    pub fn sheets(&self) -> &[StyleSheet] {
        &self.sheets
    }

    pub fn get(&self, id: &str) -> Option<&StyleSheet> {
        self.sheets.iter().find(|sheet| sheet.id.as_deref() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Default for StyleSheets {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleInjector for StyleSheets {
    fn inject(&mut self, css: &str, id: Option<&str>, parent: Option<&str>) -> bool {
        if !self.attached {
            tracing::warn!(?id, "no document to inject stylesheet into");
            return false;
        }

        if let Some(id) = id {
            if self.get(id).is_some() {
                tracing::trace!(id, "stylesheet already injected");
                return true;
            }
        }

        self.sheets.push(StyleSheet {
            id: id.map(str::to_string),
            parent: parent.map(str::to_string),
            css: css.to_string(),
        });
        true
    }
}
