// Chunk: docs/chunks/syntax_highlighting - Markup highlighter over escaped text
// Chunk: docs/chunks/grammar_registration - Runtime grammar registration

//! The highlighter capability and its tree-sitter implementation.
//!
//! A [`Highlighter`] receives the overlay's [`CodeElement`] after its text has
//! been escaped into markup, and rewrites the markup in place, wrapping runs
//! of text in `<span class="token ...">`. It never changes the displayed
//! text: stripping the spans and unescaping always yields the document.
//!
//! One highlighter is shared by every editor instance that holds a reference
//! to it, so grammars registered through one editor are visible to all of
//! them. State that changes after construction (the grammar table, compiled
//! queries, the parser) lives behind `RefCell`; the editor is single-threaded.

use crate::element::CodeElement;
use crate::error::{Result, SyntaxError};
use crate::escape::push_escaped;
use crate::registry::{normalize_language_id, LanguageDefinition, LanguageRegistry};
use crate::theme::TokenTheme;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::rc::Rc;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor, Tree};

/// The highlighting capability consumed by the synchronization engine.
pub trait Highlighter {
    /// Rewrites `element`'s markup with token spans for `language`.
    ///
    /// Unknown languages leave the markup untouched.
    fn highlight(&self, element: &mut CodeElement, language: &str);

    /// Registers a grammar under `name`, replacing any previous one.
    fn add_language(&self, name: &str, definition: LanguageDefinition) -> Result<()>;

    /// Returns true if `language` resolves to a registered grammar.
    fn supports_language(&self, language: &str) -> bool;
}

// Chunk: docs/chunks/highlight_capture_alloc - Capture entries without per-capture Strings
/// A capture entry: (start_byte, end_byte, capture_index).
///
/// The capture_index is looked up in `Query::capture_names()` only when the
/// run is rendered.
type CaptureEntry = (usize, usize, u32);

/// A run of source bytes with an optional token class.
#[derive(Debug, Clone, PartialEq)]
struct TokenRun {
    class: Option<&'static str>,
    range: Range<usize>,
}

/// A grammar whose highlights query has been compiled.
struct CompiledLanguage {
    definition: LanguageDefinition,
    query: Query,
}

/// Tree-sitter backed [`Highlighter`].
///
/// Queries are compiled once per language, on first use or on registration.
/// Every `highlight` call performs a full parse: the document is replaced
/// wholesale on each update, so there is no edit history to parse
/// incrementally against.
pub struct TreeSitterHighlighter {
    registry: RefCell<LanguageRegistry>,
    compiled: RefCell<HashMap<String, Rc<CompiledLanguage>>>,
    parser: RefCell<Parser>,
    theme: TokenTheme,
}

impl TreeSitterHighlighter {
    /// Creates a highlighter with all built-in grammars and the Prism token theme.
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::new(), TokenTheme::prism())
    }

    /// Creates a highlighter over a custom registry and theme.
    pub fn with_registry(registry: LanguageRegistry, theme: TokenTheme) -> Self {
        Self {
            registry: RefCell::new(registry),
            compiled: RefCell::new(HashMap::new()),
            parser: RefCell::new(Parser::new()),
            theme,
        }
    }

    fn compile(&self, id: &str, definition: LanguageDefinition) -> Result<CompiledLanguage> {
        self.parser
            .borrow_mut()
            .set_language(&definition.language)
            .map_err(|source| SyntaxError::IncompatibleGrammar {
                language: id.to_string(),
                source,
            })?;

        let query = Query::new(&definition.language, &definition.highlights_query).map_err(
            |source| SyntaxError::InvalidQuery {
                language: id.to_string(),
                source,
            },
        )?;

        Ok(CompiledLanguage { definition, query })
    }

    /// Returns the compiled grammar for `language`, compiling it on first use.
    fn compiled_for(&self, language: &str) -> Option<Rc<CompiledLanguage>> {
        let key = self.registry.borrow().resolve(language)?;

        if let Some(compiled) = self.compiled.borrow().get(&key) {
            return Some(Rc::clone(compiled));
        }

        let definition = self.registry.borrow().get(&key)?.clone();
        match self.compile(&key, definition) {
            Ok(compiled) => {
                let compiled = Rc::new(compiled);
                self.compiled.borrow_mut().insert(key, Rc::clone(&compiled));
                Some(compiled)
            }
            Err(err) => {
                tracing::warn!(language = %key, error = %err, "built-in grammar failed to compile");
                None
            }
        }
    }

    fn parse(&self, compiled: &CompiledLanguage, source: &str) -> Option<Tree> {
        let mut parser = self.parser.borrow_mut();
        parser.set_language(&compiled.definition.language).ok()?;
        parser.parse(source, None)
    }
}

impl Default for TreeSitterHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for TreeSitterHighlighter {
    fn highlight(&self, element: &mut CodeElement, language: &str) {
        let Some(compiled) = self.compiled_for(language) else {
            tracing::debug!(language, "no grammar registered, leaving markup unhighlighted");
            return;
        };

        let source = element.text_content();
        if source.is_empty() {
            return;
        }

        let Some(tree) = self.parse(&compiled, source) else {
            tracing::warn!(language, "parse failed, leaving markup unhighlighted");
            return;
        };

        let captures = collect_captures(&compiled.query, &tree, source);
        let runs = merge_runs(build_runs(source, &captures, &compiled.query, &self.theme));
        let markup = render_runs(source, &runs);

        tracing::trace!(language, captures = captures.len(), runs = runs.len(), "highlighted");
        element.set_inner_html(markup);
    }

    fn add_language(&self, name: &str, definition: LanguageDefinition) -> Result<()> {
        let id = normalize_language_id(name);
        if id.is_empty() {
            return Err(SyntaxError::EmptyName);
        }

        let compiled = self.compile(&id, definition.clone())?;
        self.registry.borrow_mut().register(&id, definition);
        self.compiled.borrow_mut().insert(id.clone(), Rc::new(compiled));

        tracing::debug!(language = %id, "registered grammar");
        Ok(())
    }

    fn supports_language(&self, language: &str) -> bool {
        self.registry.borrow().resolve(language).is_some()
    }
}

/// Collects all captures in the source, sorted by start byte.
fn collect_captures(query: &Query, tree: &Tree, source: &str) -> Vec<CaptureEntry> {
    let mut captures = Vec::new();
    let mut cursor = QueryCursor::new();

    let mut captures_iter = cursor.captures(query, tree.root_node(), source.as_bytes());
    while let Some((mat, capture_idx)) = captures_iter.next() {
        let capture = &mat.captures[*capture_idx];
        let node = capture.node;
        captures.push((node.start_byte(), node.end_byte(), capture.index));
    }

    // Captures may not be in order
    captures.sort_by_key(|(start, _, _)| *start);
    captures
}

/// Splits `source` into token runs from sorted captures.
///
/// Tree-sitter can return several captures for overlapping nodes (layered
/// queries such as C/C++). The first capture to reach a byte wins; when a
/// later capture extends past the covered region, its uncovered tail is
/// emitted as plain text so no byte is dropped. Zero-width captures (MISSING
/// nodes in unfinished code) cover nothing and are skipped.
fn build_runs(
    source: &str,
    captures: &[CaptureEntry],
    query: &Query,
    theme: &TokenTheme,
) -> Vec<TokenRun> {
    let source_len = source.len();
    let mut runs = Vec::new();
    let mut covered_until = 0;

    for (cap_start, cap_end, cap_idx) in captures {
        let start = (*cap_start).min(source_len);
        let end = (*cap_end).min(source_len);

        if end <= start || end <= covered_until {
            continue;
        }
        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            continue;
        }

        if start > covered_until {
            runs.push(TokenRun {
                class: None,
                range: covered_until..start,
            });
            covered_until = start;
        }

        let class = if start < covered_until {
            None
        } else {
            query
                .capture_names()
                .get(*cap_idx as usize)
                .and_then(|name| theme.class_for_capture(name))
        };
        runs.push(TokenRun {
            class,
            range: covered_until..end,
        });
        covered_until = end;
    }

    if covered_until < source_len {
        runs.push(TokenRun {
            class: None,
            range: covered_until..source_len,
        });
    }

    runs
}

/// Merges adjacent runs that have the same class.
fn merge_runs(runs: Vec<TokenRun>) -> Vec<TokenRun> {
    let mut result: Vec<TokenRun> = Vec::with_capacity(runs.len());

    for run in runs {
        if let Some(last) = result.last_mut() {
            if last.class == run.class && last.range.end == run.range.start {
                last.range.end = run.range.end;
                continue;
            }
        }
        result.push(run);
    }

    result
}

/// Renders runs as escaped markup with token spans.
fn render_runs(source: &str, runs: &[TokenRun]) -> String {
    let mut out = String::with_capacity(source.len() * 2);

    for run in runs {
        let text = &source[run.range.clone()];
        match run.class {
            Some(class) => {
                out.push_str("<span class=\"token ");
                out.push_str(class);
                out.push_str("\">");
                push_escaped(&mut out, text);
                out.push_str("</span>");
            }
            None => push_escaped(&mut out, text),
        }
    }

    out
}

/// A [`Highlighter`] that leaves the escaped markup as it is.
///
/// Useful for hosts that highlight elsewhere (or not at all) and for tests
/// that only care about synchronization.
#[derive(Debug, Default)]
pub struct PlainHighlighter {
    languages: RefCell<HashSet<String>>,
}

impl PlainHighlighter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Highlighter for PlainHighlighter {
    fn highlight(&self, _element: &mut CodeElement, _language: &str) {}

    fn add_language(&self, name: &str, _definition: LanguageDefinition) -> Result<()> {
        let id = normalize_language_id(name);
        if id.is_empty() {
            return Err(SyntaxError::EmptyName);
        }
        self.languages.borrow_mut().insert(id);
        Ok(())
    }

    fn supports_language(&self, language: &str) -> bool {
        self.languages
            .borrow()
            .contains(&normalize_language_id(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::unescape_html;
    use proptest::prelude::*;
    use tree_sitter::Language;

    const BUILTIN_LANGUAGES: [&str; 12] = [
        "rust", "c", "cpp", "python", "javascript", "typescript", "tsx", "go", "json", "html",
        "css", "bash",
    ];

    /// Strips tags and unescapes, recovering the text a browser would display.
    fn displayed_text(markup: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for ch in markup.chars() {
            match ch {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {}
            }
        }
        unescape_html(&text)
    }

    fn highlighted(source: &str, language: &str) -> String {
        let highlighter = TreeSitterHighlighter::new();
        let mut code = CodeElement::new();
        code.fill_text(source);
        highlighter.highlight(&mut code, language);
        code.inner_html().to_string()
    }

    // ==================== Tree-sitter highlighting ====================

    #[test]
    fn test_keyword_gets_token_span() {
        let markup = highlighted("fn main() {}", "rust");
        assert!(
            markup.contains(r#"<span class="token keyword">fn</span>"#),
            "unexpected markup: {}",
            markup
        );
    }

    #[test]
    fn test_displayed_text_is_preserved() {
        let sources = [
            ("fn main() { let s = \"<&>\"; }\n", "rust"),
            ("const x = a < b && c > d;\n\n", "javascript"),
            ("<div class=\"x\">&amp;</div>", "html"),
            ("def f(x):\n    return x # 'q'\n", "python"),
        ];
        for (source, language) in sources {
            let markup = highlighted(source, language);
            assert_eq!(displayed_text(&markup), source, "language {}", language);
        }
    }

    #[test]
    fn test_text_inside_tokens_is_escaped() {
        let markup = highlighted("let s = \"<b>\";", "rust");
        assert!(!markup.contains("<b>"));
        assert!(markup.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_unknown_language_leaves_escaped_markup() {
        let markup = highlighted("a < b", "cobol");
        assert_eq!(markup, "a &lt; b");
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(highlighted("", "rust"), "");
    }

    #[test]
    fn test_alias_highlights() {
        let markup = highlighted("function f() {}", "js");
        assert!(markup.contains("token keyword"));
    }

    // ==================== Grammar registration ====================

    #[test]
    fn test_add_language_registers_grammar() {
        let highlighter = TreeSitterHighlighter::with_registry(
            LanguageRegistry::empty(),
            TokenTheme::prism(),
        );
        assert!(!highlighter.supports_language("settings"));

        highlighter
            .add_language(
                "settings",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), "(number) @number"),
            )
            .unwrap();
        assert!(highlighter.supports_language("Settings"));

        let mut code = CodeElement::new();
        code.fill_text("{\"a\": 42}");
        highlighter.highlight(&mut code, "settings");
        assert!(code.inner_html().contains(r#"<span class="token number">42</span>"#));
    }

    #[test]
    fn test_add_language_rejects_bad_query() {
        let highlighter = TreeSitterHighlighter::new();
        let err = highlighter
            .add_language(
                "broken",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), "(not_a_node) @x"),
            )
            .unwrap_err();
        assert!(matches!(err, SyntaxError::InvalidQuery { .. }));
        assert!(!highlighter.supports_language("broken"));
    }

    #[test]
    fn test_add_language_rejects_empty_name() {
        let highlighter = TreeSitterHighlighter::new();
        let err = highlighter
            .add_language(
                "  ",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), "(number) @number"),
            )
            .unwrap_err();
        assert!(matches!(err, SyntaxError::EmptyName));
    }

    // ==================== Runs ====================

    fn number_query() -> Query {
        let language: Language = tree_sitter_json::LANGUAGE.into();
        Query::new(&language, "(number) @number").unwrap()
    }

    /// Asserts the runs cover `0..len` exactly once, in order.
    fn assert_tiles(runs: &[TokenRun], len: usize) {
        let mut at = 0;
        for run in runs {
            assert_eq!(run.range.start, at, "runs {:?}", runs);
            assert!(run.range.end > run.range.start, "empty run in {:?}", runs);
            at = run.range.end;
        }
        assert_eq!(at, len, "runs {:?}", runs);
    }

    #[test]
    fn test_zero_width_captures_do_not_repeat_gaps() {
        let source = "x%{a*A";
        let captures = vec![(0, 1, 0), (4, 4, 0), (4, 4, 0), (5, 6, 0)];
        let runs = build_runs(source, &captures, &number_query(), &TokenTheme::prism());
        assert_tiles(&runs, source.len());
    }

    #[test]
    fn test_overlapping_capture_emits_only_its_tail() {
        let source = "abcdef";
        let captures = vec![(0, 4, 0), (2, 6, 0), (1, 3, 0)];
        let runs = build_runs(source, &captures, &number_query(), &TokenTheme::prism());
        assert_tiles(&runs, source.len());
        assert_eq!(runs[1].class, None);
        assert_eq!(runs[1].range, 4..6);
    }

    #[test]
    fn test_unfinished_code_is_displayed_once() {
        for (source, language) in [
            ("x%{a*A", "javascript"),
            ("\u{3131}%{\u{0d9a}*A", "javascript"),
            ("fn main() { let x = (1", "rust"),
            ("<div><span", "html"),
            ("def f(:\n  [", "python"),
            ("{\"a\": [1, ", "json"),
            ("int main( {", "c"),
        ] {
            let markup = highlighted(source, language);
            assert_eq!(displayed_text(&markup), source, "language {}", language);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn highlighted_markup_displays_the_source(source in any::<String>()) {
            let highlighter = TreeSitterHighlighter::new();
            for language in BUILTIN_LANGUAGES {
                let mut code = CodeElement::new();
                code.fill_text(&source);
                highlighter.highlight(&mut code, language);
                prop_assert_eq!(displayed_text(code.inner_html()), source.clone(), "language {}", language);
            }
        }

        #[test]
        fn bracket_heavy_text_displays_the_source(source in "[a-z0-9 %*<>/=;:\"'(){}\\[\\]\n]{0,40}") {
            let highlighter = TreeSitterHighlighter::new();
            for language in BUILTIN_LANGUAGES {
                let mut code = CodeElement::new();
                code.fill_text(&source);
                highlighter.highlight(&mut code, language);
                prop_assert_eq!(displayed_text(code.inner_html()), source.clone(), "language {}", language);
            }
        }
    }

    #[test]
    fn test_merge_runs_joins_same_class() {
        let runs = vec![
            TokenRun { class: Some("punctuation"), range: 0..1 },
            TokenRun { class: Some("punctuation"), range: 1..2 },
            TokenRun { class: None, range: 2..3 },
        ];
        let merged = merge_runs(runs);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].range, 0..2);
    }

    #[test]
    fn test_render_runs_escapes_plain_text() {
        let runs = vec![
            TokenRun { class: None, range: 0..2 },
            TokenRun { class: Some("number"), range: 2..3 },
        ];
        assert_eq!(render_runs("<&1", &runs), "&lt;&amp;<span class=\"token number\">1</span>");
    }

    // ==================== Plain highlighter ====================

    #[test]
    fn test_plain_highlighter_keeps_markup() {
        let highlighter = PlainHighlighter::new();
        let mut code = CodeElement::new();
        code.fill_text("<x>");
        highlighter.highlight(&mut code, "html");
        assert_eq!(code.inner_html(), "&lt;x&gt;");
    }

    #[test]
    fn test_plain_highlighter_tracks_languages() {
        let highlighter = PlainHighlighter::new();
        highlighter
            .add_language(
                "Json",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), ""),
            )
            .unwrap();
        assert!(highlighter.supports_language("json"));
        assert!(!highlighter.supports_language("rust"));
    }
}
