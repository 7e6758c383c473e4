// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
//!
//! Shared harness for the editor integration tests.
//!
//! [`MockHost`] plays the browser: it forwards keydowns to the editor, applies
//! the native insertion or caret movement when the editor lets the event
//! through, and runs the deferred queue the way the event loop would on the
//! next tick.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use overlay_edit::{
    Candidate, CodeEditor, Collaborators, EditorOptions, EditorTarget, EventResponse, Highlighter,
    InputSurface, Key, KeyEvent, MonospaceResolver, PlainHighlighter, StyleSheets,
};

/// Character width used by every harness editor.
pub const CHAR_WIDTH: f32 = 8.0;

/// Line height used by every harness editor.
pub const LINE_HEIGHT: f32 = 20.0;

/// Rendered textarea width used by every harness editor.
pub const SURFACE_WIDTH: f32 = 400.0;

pub struct MockHost {
    pub editor: CodeEditor,
    pub styles: StyleSheets,
    updates: Rc<RefCell<Vec<String>>>,
    chosen: Rc<RefCell<Vec<Candidate>>>,
}

impl MockHost {
    pub fn new(content: &str) -> Self {
        Self::with_options(content, EditorOptions::default())
    }

    pub fn with_options(content: &str, options: EditorOptions) -> Self {
        Self::with_highlighter(content, options, Rc::new(PlainHighlighter::new()))
    }

    pub fn with_highlighter(
        content: &str,
        options: EditorOptions,
        highlighter: Rc<dyn Highlighter>,
    ) -> Self {
        let mut styles = StyleSheets::new();
        let mut editor = CodeEditor::new(
            Some(EditorTarget::new(content).with_width(SURFACE_WIDTH)),
            Some(options),
            Collaborators::new(
                highlighter,
                Box::new(MonospaceResolver::new(CHAR_WIDTH, LINE_HEIGHT, 0.0)),
                &mut styles,
            ),
        )
        .expect("editor mounts");

        let updates = Rc::new(RefCell::new(Vec::new()));
        let chosen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&updates);
        editor.on_update(Some(Box::new(move |code: &str| {
            sink.borrow_mut().push(code.to_string())
        })));
        let sink = Rc::clone(&chosen);
        editor.on_auto_suggestions_select(Some(Box::new(move |candidate: &Candidate| {
            sink.borrow_mut().push(candidate.clone())
        })));

        let mut host = Self {
            editor,
            styles,
            updates,
            chosen,
        };
        host.settle();
        host.updates.borrow_mut().clear();
        host
    }

    /// Delivers a keydown, then the native behavior if it was not prevented.
    pub fn press(&mut self, event: KeyEvent) -> EventResponse {
        let response = self.editor.handle_keydown(&event);
        if !response.lets_native_through() || event.modifiers.is_shortcut() {
            return response;
        }

        match event.key {
            Key::Char(ch) => {
                let mut buf = [0u8; 4];
                self.editor.type_text(ch.encode_utf8(&mut buf));
            }
            Key::Return => self.editor.type_text("\n"),
            Key::Backspace => {
                self.editor.surface_mut().delete_backward();
                self.editor.handle_input();
            }
            // A ranged selection collapses to its edge, a caret moves one char
            Key::Left => {
                let selection = self.editor.surface().selection().ordered();
                let caret = if selection.is_collapsed() {
                    selection.start.saturating_sub(1)
                } else {
                    selection.start
                };
                self.editor.surface_mut().set_caret(caret);
            }
            Key::Right => {
                let selection = self.editor.surface().selection().ordered();
                let caret = if selection.is_collapsed() {
                    selection.end + 1
                } else {
                    selection.end
                };
                self.editor.surface_mut().set_caret(caret);
            }
            _ => {}
        }
        response
    }

    /// Types `text` one keystroke at a time, running the queue after each.
    pub fn type_keys(&mut self, text: &str) {
        for ch in text.chars() {
            let event = match ch {
                '\n' => KeyEvent::plain(Key::Return),
                ch => KeyEvent::char(ch),
            };
            self.press(event);
            self.settle();
        }
    }

    /// Runs deferred tasks until the queue is empty.
    pub fn settle(&mut self) {
        while self.editor.run_deferred() > 0 {}
    }

    pub fn code(&self) -> &str {
        self.editor.get_code()
    }

    pub fn caret(&self) -> usize {
        self.editor.selection().end
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.editor.surface_mut().set_caret(offset);
    }

    /// Every text the update callback has received, oldest first.
    pub fn updates(&self) -> Vec<String> {
        self.updates.borrow().clone()
    }

    /// Every candidate the select callback has received, oldest first.
    pub fn chosen(&self) -> Vec<Candidate> {
        self.chosen.borrow().clone()
    }
}

/// Options with the suggestion popup enabled.
pub fn suggesting() -> EditorOptions {
    EditorOptions {
        auto_suggestions: true,
        ..EditorOptions::default()
    }
}

/// `titles` as candidates with empty descriptions.
pub fn candidates(titles: &[&str]) -> Vec<Candidate> {
    titles.iter().map(|title| Candidate::new(*title, "")).collect()
}
