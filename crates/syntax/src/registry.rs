// Chunk: docs/chunks/syntax_highlighting - Language registry for the built-in grammars
// Chunk: docs/chunks/grammar_registration - Runtime grammar registration

//! Language registry mapping language ids to tree-sitter grammars.
//!
//! The registry is keyed by the language id the editor is configured with
//! (`"rust"`, `"javascript"`, `"html"`, ...). Common short names and file
//! extensions are accepted as aliases. Hosts add grammars at runtime with
//! [`LanguageRegistry::register`].

use std::borrow::Cow;
use std::collections::HashMap;
use tree_sitter::Language;

/// A grammar definition: a tree-sitter language plus its highlights query.
#[derive(Clone)]
pub struct LanguageDefinition {
    /// The tree-sitter language
    pub language: Language,
    /// The highlights query (tree-sitter query syntax)
    pub highlights_query: Cow<'static, str>,
}

impl LanguageDefinition {
    /// Creates a new language definition.
    pub fn new(language: Language, highlights_query: impl Into<Cow<'static, str>>) -> Self {
        Self {
            language,
            highlights_query: highlights_query.into(),
        }
    }
}

impl std::fmt::Debug for LanguageDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageDefinition")
            .field("query_len", &self.highlights_query.len())
            .finish()
    }
}

/// Normalizes a language id: lowercase, trimmed.
pub fn normalize_language_id(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Maps aliases to the canonical id of a built-in grammar.
fn canonical_id(name: &str) -> &str {
    match name {
        "rs" => "rust",
        "py" => "python",
        "js" | "jsx" | "mjs" => "javascript",
        "ts" => "typescript",
        "sh" | "shell" | "zsh" => "bash",
        "c++" | "cc" | "cxx" | "hpp" => "cpp",
        "golang" => "go",
        "markup" | "htm" => "html",
        other => other,
    }
}

/// Registry mapping language ids to grammar definitions.
///
/// Supports Rust, C, C++, Python, JavaScript, TypeScript, TSX, Go, JSON,
/// HTML, CSS and Bash out of the box.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    definitions: HashMap<String, LanguageDefinition>,
}

impl LanguageRegistry {
    /// Creates an empty language registry.
    pub fn empty() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Creates a new language registry with all built-in languages.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.insert(
            "rust",
            LanguageDefinition::new(
                tree_sitter_rust::LANGUAGE.into(),
                tree_sitter_rust::HIGHLIGHTS_QUERY,
            ),
        );

        // C uses HIGHLIGHT_QUERY (no S)
        registry.insert(
            "c",
            LanguageDefinition::new(tree_sitter_c::LANGUAGE.into(), tree_sitter_c::HIGHLIGHT_QUERY),
        );

        // The C++ query only covers C++-specific constructs; types, keywords and
        // functions come from the C query layered underneath.
        registry.insert(
            "cpp",
            LanguageDefinition::new(
                tree_sitter_cpp::LANGUAGE.into(),
                format!("{}\n{}", tree_sitter_c::HIGHLIGHT_QUERY, tree_sitter_cpp::HIGHLIGHT_QUERY),
            ),
        );

        registry.insert(
            "python",
            LanguageDefinition::new(
                tree_sitter_python::LANGUAGE.into(),
                tree_sitter_python::HIGHLIGHTS_QUERY,
            ),
        );

        registry.insert(
            "javascript",
            LanguageDefinition::new(
                tree_sitter_javascript::LANGUAGE.into(),
                tree_sitter_javascript::HIGHLIGHT_QUERY,
            ),
        );

        // TypeScript layers its query over the JavaScript one, same as C/C++
        let ts_combined_query = format!(
            "{}\n{}",
            tree_sitter_javascript::HIGHLIGHT_QUERY,
            tree_sitter_typescript::HIGHLIGHTS_QUERY
        );
        registry.insert(
            "typescript",
            LanguageDefinition::new(
                tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
                ts_combined_query.clone(),
            ),
        );
        registry.insert(
            "tsx",
            LanguageDefinition::new(tree_sitter_typescript::LANGUAGE_TSX.into(), ts_combined_query),
        );

        registry.insert(
            "go",
            LanguageDefinition::new(tree_sitter_go::LANGUAGE.into(), tree_sitter_go::HIGHLIGHTS_QUERY),
        );

        registry.insert(
            "json",
            LanguageDefinition::new(
                tree_sitter_json::LANGUAGE.into(),
                tree_sitter_json::HIGHLIGHTS_QUERY,
            ),
        );

        registry.insert(
            "html",
            LanguageDefinition::new(
                tree_sitter_html::LANGUAGE.into(),
                tree_sitter_html::HIGHLIGHTS_QUERY,
            ),
        );

        registry.insert(
            "css",
            LanguageDefinition::new(tree_sitter_css::LANGUAGE.into(), tree_sitter_css::HIGHLIGHTS_QUERY),
        );

        // Bash uses HIGHLIGHT_QUERY (no S)
        registry.insert(
            "bash",
            LanguageDefinition::new(tree_sitter_bash::LANGUAGE.into(), tree_sitter_bash::HIGHLIGHT_QUERY),
        );

        registry
    }

    fn insert(&mut self, id: &str, definition: LanguageDefinition) {
        self.definitions.insert(id.to_string(), definition);
    }

    /// Registers (or replaces) a grammar under `name`.
    ///
    /// A registered name shadows any alias with the same spelling.
    pub fn register(&mut self, name: &str, definition: LanguageDefinition) {
        self.definitions.insert(normalize_language_id(name), definition);
    }

    /// Resolves a language id or alias to the key it is stored under.
    pub fn resolve(&self, name: &str) -> Option<String> {
        let name = normalize_language_id(name);
        if self.definitions.contains_key(&name) {
            return Some(name);
        }
        let canonical = canonical_id(&name);
        self.definitions
            .contains_key(canonical)
            .then(|| canonical.to_string())
    }

    /// Returns the grammar for a language id or alias.
    ///
    /// Unknown languages return `None` and gracefully fall back to no
    /// highlighting.
    pub fn get(&self, name: &str) -> Option<&LanguageDefinition> {
        let key = self.resolve(name)?;
        self.definitions.get(&key)
    }

    /// Returns an iterator over the registered language ids.
    pub fn language_ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}
