// Chunk: docs/chunks/editor_construction - Construction and registration errors
// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
// Chunk: docs/chunks/suggestion_popup - Caret-anchored suggestion popup
//!
//! The host-facing editor.
//!
//! [`CodeEditor`] ties the pieces together and is the only type a host talks
//! to. The host forwards DOM events to it:
//!
//! | DOM event          | call                                   |
//! |--------------------|----------------------------------------|
//! | `keydown`          | [`CodeEditor::handle_keydown`]         |
//! | `input`            | [`CodeEditor::handle_input`]           |
//! | `scroll`           | [`CodeEditor::handle_scroll`]          |
//! | click on a `<li>`  | [`CodeEditor::click_suggestion`]       |
//! | next tick          | [`CodeEditor::run_deferred`]           |
//!
//! and reads back the overlay markup, gutter, popup and class changes to
//! apply to its elements.

use std::rc::Rc;

use overlay_edit_buffer::CaretRange;
use overlay_edit_input::{EventResponse, KeyEvent, ScrollPosition};
use overlay_edit_syntax::{normalize_language_id, Highlighter, LanguageDefinition};

use crate::context::KeyContext;
use crate::coordinates::CoordinateResolver;
use crate::error::{EditorError, Result};
use crate::interceptor::{close_character, Handled, KeyboardInterceptor};
use crate::options::{EditorOptions, DEFAULT_LANGUAGE};
use crate::overlay::{LineGutter, OverlayLayer};
use crate::popup_layout::{calculate_popup_position, POPUP_MIN_WIDTH};
use crate::presentation::{Presentation, PresentationChange};
use crate::styles::{
    StyleInjector, DEFAULT_THEME_CSS, DEFAULT_THEME_ID, EDITOR_CSS, EDITOR_STYLE_ID,
};
use crate::suggestions::{Candidate, SuggestionPopup};
use crate::surface::{InputSurface, TextArea};
use crate::sync::SyncEngine;
use crate::task_queue::{DeferredTask, TaskQueue};

/// Callback invoked with the buffer after each deferred sync.
pub type UpdateCallback = Box<dyn FnMut(&str)>;

/// Callback invoked with the chosen suggestion.
pub type SelectCallback = Box<dyn FnMut(&Candidate)>;

/// The element the editor is mounted on.
///
/// Its existing content becomes the initial document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorTarget {
    content: String,
    width: f32,
}

impl EditorTarget {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            width: 0.0,
        }
    }

    /// Sets the rendered width the textarea will have once mounted.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The collaborators an editor consumes.
pub struct Collaborators<'a> {
    /// Shared highlighter; every editor holding it sees its grammars
    pub highlighter: Rc<dyn Highlighter>,
    /// Caret pixel coordinates for popup placement
    pub resolver: Box<dyn CoordinateResolver>,
    /// Where the stylesheets go
    pub styles: &'a mut dyn StyleInjector,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        highlighter: Rc<dyn Highlighter>,
        resolver: Box<dyn CoordinateResolver>,
        styles: &'a mut dyn StyleInjector,
    ) -> Self {
        Self {
            highlighter,
            resolver,
            styles,
        }
    }
}

pub struct CodeEditor {
    options: EditorOptions,
    engine: SyncEngine,
    interceptor: KeyboardInterceptor,
    suggestions: SuggestionPopup,
    resolver: Box<dyn CoordinateResolver>,
    presentation: Presentation,
    presentation_changes: Vec<PresentationChange>,
    on_update: Option<UpdateCallback>,
    on_select: Option<SelectCallback>,
}

impl CodeEditor {
    /// Mounts an editor on `target`.
    ///
    /// Fails if `target` or `options` is missing, or if a stylesheet cannot
    /// be injected. The target's content is committed as the initial
    /// document and the gutter is populated before this returns; the host
    /// notification for it is deferred like any other.
    pub fn new(
        target: Option<EditorTarget>,
        options: Option<EditorOptions>,
        collaborators: Collaborators<'_>,
    ) -> Result<Self> {
        let target = target.ok_or(EditorError::MissingTarget)?;
        let options = options.ok_or(EditorError::MissingOptions)?.normalized();
        let Collaborators {
            highlighter,
            resolver,
            styles,
        } = collaborators;

        let parent = options.style_parent.as_deref();
        if !styles.inject(EDITOR_CSS, Some(EDITOR_STYLE_ID), parent) {
            return Err(EditorError::style_injection(EDITOR_STYLE_ID));
        }
        if options.default_theme
            && !styles.inject(DEFAULT_THEME_CSS, Some(DEFAULT_THEME_ID), parent)
        {
            return Err(EditorError::style_injection(DEFAULT_THEME_ID));
        }

        let mut engine = SyncEngine::new(&options.language, highlighter, options.line_numbers);
        engine.surface_mut().set_rendered_width(target.width);

        let mut editor = Self {
            presentation: Presentation::derive(&options),
            options,
            engine,
            interceptor: KeyboardInterceptor::new(),
            suggestions: SuggestionPopup::new(),
            resolver,
            presentation_changes: Vec::new(),
            on_update: None,
            on_select: None,
        };

        editor.update_code(target.content());
        editor.engine.recount_lines();

        tracing::debug!(
            language = %editor.options.language,
            line_numbers = editor.options.line_numbers,
            auto_suggestions = editor.options.auto_suggestions,
            "editor mounted"
        );
        Ok(editor)
    }

    // ==================== Public API ====================

    /// Returns the current document.
    pub fn get_code(&self) -> &str {
        self.engine.text()
    }

    /// Replaces the document, re-renders and re-highlights.
    pub fn update_code(&mut self, code: &str) {
        self.engine.set_text(code);
    }

    /// Switches the language.
    ///
    /// The code element's language class is swapped through a presentation
    /// diff, which the host drains with
    /// [`CodeEditor::take_presentation_changes`].
    ///
    /// A blank id falls back to [`DEFAULT_LANGUAGE`], as at construction.
    pub fn update_language(&mut self, language: &str) {
        let language = match language.trim() {
            "" => DEFAULT_LANGUAGE,
            trimmed => trimmed,
        };
        self.options.language = language.to_string();
        self.engine.set_language(language);

        let next = Presentation::derive(&self.options);
        let changes = self.presentation.diff(&next);
        tracing::debug!(language, changes = changes.len(), "language updated");

        self.presentation = next;
        self.presentation_changes.extend(changes);
    }

    /// Registers a grammar with the shared highlighter.
    ///
    /// If the grammar is for the current language, the overlay is
    /// re-highlighted right away.
    pub fn add_language(&mut self, name: &str, definition: LanguageDefinition) -> Result<()> {
        self.engine.highlighter().add_language(name, definition)?;

        if normalize_language_id(name) == normalize_language_id(&self.options.language) {
            self.engine.render();
        }
        Ok(())
    }

    /// Sets or clears the update callback.
    pub fn on_update(&mut self, callback: Option<UpdateCallback>) {
        self.on_update = callback;
    }

    /// Installs a suggestion list, or hides the popup for `None` or an
    /// empty list.
    ///
    /// The popup is placed one line below the caret at the surface's
    /// selection end. The host decides when to send lists, so this does not
    /// consult the `auto_suggestions` option.
    pub fn set_auto_suggestions_results(&mut self, results: Option<Vec<Candidate>>) {
        let candidates = match results {
            Some(candidates) if !candidates.is_empty() => candidates,
            _ => {
                self.suggestions.hide();
                return;
            }
        };

        let surface = self.engine.surface();
        let caret = self.resolver.resolve(surface, surface.selection().end);
        let position = calculate_popup_position(
            caret,
            POPUP_MIN_WIDTH,
            surface.rendered_width(),
            self.options.theme_options.line_height,
        );

        self.suggestions.install(candidates, position);
    }

    /// Sets or clears the suggestion selection callback.
    pub fn on_auto_suggestions_select(&mut self, callback: Option<SelectCallback>) {
        self.on_select = callback;
    }

    // ==================== DOM events ====================

    /// Runs a keydown through the interceptor chain.
    ///
    /// The returned response tells the host whether to call
    /// `preventDefault()` and `stopPropagation()`.
    pub fn handle_keydown(&mut self, event: &KeyEvent) -> EventResponse {
        let mut ctx = KeyContext::new(&mut self.engine, &mut self.suggestions, self.options.tab_size);
        let handled = self.interceptor.dispatch(event, &mut ctx);
        let response = ctx.response;
        let chosen = ctx.chosen;

        if handled == Handled::No {
            tracing::trace!(key = ?event.key, "key passed to native input");
        }
        if let Some(index) = chosen {
            self.choose_suggestion(index);
        }
        response
    }

    /// Syncs after a native edit. The host has already written the
    /// textarea's value and selection into [`CodeEditor::surface_mut`].
    pub fn handle_input(&mut self) {
        self.engine.on_input();
    }

    /// Applies a native insertion of `text` at the selection and syncs.
    ///
    /// This is what the browser does after a keydown it was allowed to
    /// handle, or on paste.
    pub fn type_text(&mut self, text: &str) {
        self.engine.surface_mut().insert_text(text);
        self.engine.on_input();
    }

    pub fn handle_scroll(&mut self, scroll: ScrollPosition) {
        self.engine.mirror_scroll(scroll);
    }

    /// Chooses the suggestion at `index`, as a click on its list item does.
    pub fn click_suggestion(&mut self, index: usize) {
        self.choose_suggestion(index);
    }

    /// Inserts `close` at the selection with the caret in front of it; see
    /// [`close_character`].
    pub fn close_character(&mut self, close: &str, caret_offset: usize) {
        close_character(&mut self.engine, close, caret_offset);
    }

    /// Runs the tasks posted before this tick. Returns how many ran.
    ///
    /// Tasks posted while they run wait for the next call.
    pub fn run_deferred(&mut self) -> usize {
        let tasks = self.engine.take_tasks();

        for task in &tasks {
            tracing::trace!(?task, "running deferred task");
            match *task {
                DeferredTask::NotifyUpdate => {
                    if let Some(callback) = self.on_update.as_mut() {
                        callback(self.engine.text());
                    }
                }
                DeferredTask::RecountLines => self.engine.recount_lines(),
                DeferredTask::PlaceCaret(offset) => self.engine.surface_mut().set_caret(offset),
            }
        }

        tasks.len()
    }

    fn choose_suggestion(&mut self, index: usize) {
        let Some(candidate) = self.suggestions.candidate(index) else {
            tracing::debug!(index, "no suggestion at index");
            return;
        };

        tracing::debug!(index, title = %candidate.title, "suggestion chosen");
        if let Some(callback) = self.on_select.as_mut() {
            callback(candidate);
        }
    }

    // ==================== State ====================

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn language(&self) -> &str {
        self.engine.language()
    }

    pub fn surface(&self) -> &TextArea {
        self.engine.surface()
    }

    /// Mutable surface, for hosts mirroring the DOM textarea's state.
    pub fn surface_mut(&mut self) -> &mut TextArea {
        self.engine.surface_mut()
    }

    pub fn selection(&self) -> CaretRange {
        self.engine.surface().selection()
    }

    pub fn overlay(&self) -> &OverlayLayer {
        self.engine.overlay()
    }

    pub fn gutter(&self) -> Option<&LineGutter> {
        self.engine.gutter()
    }

    pub fn line_count(&self) -> usize {
        self.engine.line_count()
    }

    pub fn suggestions(&self) -> &SuggestionPopup {
        &self.suggestions
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Takes the class and attribute changes not yet applied by the host.
    pub fn take_presentation_changes(&mut self) -> Vec<PresentationChange> {
        std::mem::take(&mut self.presentation_changes)
    }

    pub fn pending_tasks(&self) -> &TaskQueue {
        self.engine.pending_tasks()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::MonospaceResolver;
    use crate::presentation::{Change, Part};
    use crate::styles::StyleSheets;
    use overlay_edit_syntax::{PlainHighlighter, SyntaxError, TreeSitterHighlighter};
    use std::cell::RefCell;

    fn collaborators(styles: &mut StyleSheets) -> Collaborators<'_> {
        Collaborators::new(
            Rc::new(PlainHighlighter::new()),
            Box::new(MonospaceResolver::new(8.0, 20.0, 0.0)),
            styles,
        )
    }

    fn editor_with(content: &str, options: EditorOptions) -> CodeEditor {
        let mut styles = StyleSheets::new();
        CodeEditor::new(
            Some(EditorTarget::new(content).with_width(400.0)),
            Some(options),
            collaborators(&mut styles),
        )
        .unwrap()
    }

    fn editor(content: &str) -> CodeEditor {
        editor_with(content, EditorOptions::default())
    }

    // ==================== Construction ====================

    #[test]
    fn missing_target_fails() {
        let mut styles = StyleSheets::new();
        let err = CodeEditor::new(None, Some(EditorOptions::default()), collaborators(&mut styles))
            .err()
            .unwrap();
        assert!(matches!(err, EditorError::MissingTarget));
    }

    #[test]
    fn missing_options_fails() {
        let mut styles = StyleSheets::new();
        let err = CodeEditor::new(Some(EditorTarget::default()), None, collaborators(&mut styles))
            .err()
            .unwrap();
        assert!(matches!(err, EditorError::MissingOptions));
    }

    #[test]
    fn failed_style_injection_fails() {
        let mut styles = StyleSheets::detached();
        let err = CodeEditor::new(
            Some(EditorTarget::default()),
            Some(EditorOptions::default()),
            collaborators(&mut styles),
        )
        .err()
        .unwrap();
        assert!(matches!(err, EditorError::StyleInjection { ref id } if id == EDITOR_STYLE_ID));
    }

    #[test]
    fn construction_injects_editor_css_and_theme() {
        let mut styles = StyleSheets::new();
        CodeEditor::new(
            Some(EditorTarget::default()),
            Some(EditorOptions::default()),
            collaborators(&mut styles),
        )
        .unwrap();
        assert!(styles.get(EDITOR_STYLE_ID).is_some());
        assert!(styles.get(DEFAULT_THEME_ID).is_some());
    }

    #[test]
    fn theme_is_skipped_when_disabled() {
        let mut styles = StyleSheets::new();
        CodeEditor::new(
            Some(EditorTarget::default()),
            Some(EditorOptions {
                default_theme: false,
                ..EditorOptions::default()
            }),
            collaborators(&mut styles),
        )
        .unwrap();
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn target_content_becomes_document() {
        let editor = editor("<h1>hi</h1>\n");
        assert_eq!(editor.get_code(), "<h1>hi</h1>\n");
        assert_eq!(editor.overlay().markup(), "&lt;h1&gt;hi&lt;/h1&gt;\n");
        assert_eq!(editor.line_count(), 2);
    }

    #[test]
    fn gutter_is_populated_at_construction() {
        let editor = editor_with(
            "a\nb\nc",
            EditorOptions {
                line_numbers: true,
                ..EditorOptions::default()
            },
        );
        assert_eq!(editor.gutter().unwrap().numbers().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    // ==================== Deferred updates ====================

    #[test]
    fn update_callback_runs_on_next_tick() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = editor("");
        editor.run_deferred();

        let sink = Rc::clone(&seen);
        editor.on_update(Some(Box::new(move |code: &str| sink.borrow_mut().push(code.to_string()))));
        editor.update_code("first");
        assert!(seen.borrow().is_empty());

        editor.run_deferred();
        assert_eq!(*seen.borrow(), vec!["first".to_string()]);
    }

    #[test]
    fn burst_of_updates_notifies_with_latest_text() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut editor = editor("");
        let sink = Rc::clone(&seen);
        editor.on_update(Some(Box::new(move |code: &str| sink.borrow_mut().push(code.to_string()))));

        editor.update_code("a");
        editor.update_code("ab");
        editor.run_deferred();

        assert!(seen.borrow().iter().all(|code| code == "ab"));
    }

    #[test]
    fn cleared_callback_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut editor = editor("");
        let sink = Rc::clone(&calls);
        editor.on_update(Some(Box::new(move |_: &str| *sink.borrow_mut() += 1)));
        editor.on_update(None);
        editor.update_code("x");
        editor.run_deferred();
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn deferred_caret_placement() {
        let mut editor = editor("ab");
        editor.surface_mut().set_caret(1);
        editor.close_character("</>", 3);
        editor.type_text("<");
        assert_eq!(editor.get_code(), "a<</>b");

        editor.run_deferred();
        assert_eq!(editor.selection(), CaretRange::collapsed(4));
    }

    // ==================== Language ====================

    #[test]
    fn update_language_swaps_class_once() {
        let mut editor = editor("");
        editor.update_language("rust");
        editor.update_language("rust");
        editor.update_language("python");

        let code = editor.presentation().part(Part::Code).unwrap();
        assert_eq!(code.class_name(), "overlay-edit__code language-python");
        assert_eq!(editor.language(), "python");

        let changes = editor.take_presentation_changes();
        assert_eq!(changes.len(), 4);
        assert_eq!(
            changes[0].change,
            Change::RemoveClass("language-html".to_string())
        );
        assert!(editor.take_presentation_changes().is_empty());
    }

    #[test]
    fn blank_language_falls_back_to_default() {
        let mut editor = editor("");
        editor.update_language("rust");
        editor.update_language("  ");

        assert_eq!(editor.language(), DEFAULT_LANGUAGE);
        let code = editor.presentation().part(Part::Code).unwrap();
        assert_eq!(code.class_name(), "overlay-edit__code language-html");
    }

    #[test]
    fn language_id_is_trimmed() {
        let mut editor = editor("");
        editor.update_language(" python ");
        assert_eq!(editor.language(), "python");
        assert!(editor
            .presentation()
            .part(Part::Code)
            .unwrap()
            .has_class("language-python"));
    }

    #[test]
    fn add_language_rehighlights_current_language() {
        let mut styles = StyleSheets::new();
        let mut editor = CodeEditor::new(
            Some(EditorTarget::new("[1, 2]")),
            Some(EditorOptions {
                language: "numbers".to_string(),
                ..EditorOptions::default()
            }),
            Collaborators::new(
                Rc::new(TreeSitterHighlighter::new()),
                Box::new(MonospaceResolver::default()),
                &mut styles,
            ),
        )
        .unwrap();
        assert_eq!(editor.overlay().markup(), "[1, 2]");

        editor
            .add_language(
                "numbers",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), "(number) @number"),
            )
            .unwrap();
        assert!(editor
            .overlay()
            .markup()
            .contains(r#"<span class="token number">1</span>"#));
    }

    #[test]
    fn add_language_reports_bad_query() {
        let mut styles = StyleSheets::new();
        let mut editor = CodeEditor::new(
            Some(EditorTarget::default()),
            Some(EditorOptions::default()),
            Collaborators::new(
                Rc::new(TreeSitterHighlighter::new()),
                Box::new(MonospaceResolver::default()),
                &mut styles,
            ),
        )
        .unwrap();

        let err = editor
            .add_language(
                "broken",
                LanguageDefinition::new(tree_sitter_json::LANGUAGE.into(), "(nope) @x"),
            )
            .unwrap_err();
        assert!(matches!(err, EditorError::Grammar(SyntaxError::InvalidQuery { .. })));
    }

    // ==================== Suggestions ====================

    fn suggesting_editor(content: &str) -> CodeEditor {
        editor_with(
            content,
            EditorOptions {
                auto_suggestions: true,
                ..EditorOptions::default()
            },
        )
    }

    #[test]
    fn suggestions_are_placed_below_caret() {
        let mut editor = suggesting_editor("ab\ncd");
        editor.set_auto_suggestions_results(Some(vec![Candidate::new("x", "")]));

        assert!(editor.suggestions().is_visible());
        // Caret at end of "cd": line 1, column 2
        let position = editor.suggestions().position();
        assert_eq!(position.top, 40.0);
        assert_eq!(position.left, 16.0);
    }

    #[test]
    fn suggestions_are_clamped_to_surface_width() {
        let text = "x".repeat(40);
        let mut editor = suggesting_editor(&text);
        editor.set_auto_suggestions_results(Some(vec![Candidate::new("x", "")]));
        // Caret left 320, surface 400: shifted left by 220
        assert_eq!(editor.suggestions().position().left, 100.0);
    }

    #[test]
    fn empty_or_missing_results_hide() {
        let mut editor = suggesting_editor("");
        editor.set_auto_suggestions_results(Some(vec![Candidate::new("x", "")]));
        editor.set_auto_suggestions_results(Some(Vec::new()));
        assert!(!editor.suggestions().is_visible());

        editor.set_auto_suggestions_results(Some(vec![Candidate::new("x", "")]));
        editor.set_auto_suggestions_results(None);
        assert!(!editor.suggestions().is_visible());
    }

    #[test]
    fn results_shown_with_default_options() {
        let mut editor = editor("ab");
        assert!(!editor.options().auto_suggestions);

        editor.set_auto_suggestions_results(Some(vec![Candidate::new("x", "")]));
        assert!(editor.suggestions().is_visible());
        assert_eq!(editor.suggestions().candidates().len(), 1);
    }

    #[test]
    fn click_invokes_select_callback() {
        let chosen = Rc::new(RefCell::new(None));
        let mut editor = suggesting_editor("");
        let sink = Rc::clone(&chosen);
        editor.on_auto_suggestions_select(Some(Box::new(move |c: &Candidate| {
            *sink.borrow_mut() = Some(c.clone())
        })));

        editor.set_auto_suggestions_results(Some(vec![
            Candidate::new("a", "first"),
            Candidate::new("b", "second"),
        ]));
        editor.click_suggestion(1);
        editor.click_suggestion(9);

        assert_eq!(*chosen.borrow(), Some(Candidate::new("b", "second")));
        assert!(editor.suggestions().is_visible());
    }
}
