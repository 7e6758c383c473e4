// Chunk: docs/chunks/syntax_highlighting - Token classes for overlay markup

//! Token theme mapping capture names to CSS token classes.
//!
//! The overlay is styled by a stylesheet, not by inline colors, so a theme
//! here is only the capture-name → class-name mapping. Class names follow the
//! Prism convention (`token keyword`, `token string`, ...) so existing Prism
//! themes style the overlay unchanged.

use std::collections::HashMap;

/// A mapping from tree-sitter capture names to token class names.
///
/// When looking up a capture like "function.method", it first tries the
/// exact match, then falls back to prefix matches ("function").
#[derive(Debug, Clone)]
pub struct TokenTheme {
    classes: HashMap<&'static str, &'static str>,
}

impl TokenTheme {
    /// Creates the Prism-compatible token theme.
    pub fn prism() -> Self {
        let classes = HashMap::from([
            ("keyword", "keyword"),
            ("function", "function"),
            ("function.macro", "macro"),
            ("function.builtin", "builtin"),
            ("type", "class-name"),
            ("type.builtin", "builtin"),
            ("constructor", "class-name"),
            ("string", "string"),
            ("string.special", "regex"),
            ("escape", "entity"),
            ("constant", "constant"),
            ("constant.builtin", "boolean"),
            ("number", "number"),
            ("comment", "comment"),
            ("variable.parameter", "parameter"),
            ("variable.builtin", "builtin"),
            ("property", "property"),
            ("label", "label"),
            ("punctuation", "punctuation"),
            ("operator", "operator"),
            ("attribute", "attr-name"),
            ("tag", "tag"),
        ]);

        Self { classes }
    }

    /// Returns the token class for a capture name, if any.
    ///
    /// Tries an exact match first, then progressively shorter dot-separated
    /// prefixes.
    pub fn class_for_capture(&self, name: &str) -> Option<&'static str> {
        if let Some(class) = self.classes.get(name) {
            return Some(*class);
        }

        let mut prefix = name;
        while let Some(dot_pos) = prefix.rfind('.') {
            prefix = &prefix[..dot_pos];
            if let Some(class) = self.classes.get(prefix) {
                return Some(*class);
            }
        }

        None
    }
}

impl Default for TokenTheme {
    fn default() -> Self {
        Self::prism()
    }
}
