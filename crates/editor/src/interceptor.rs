// Chunk: docs/chunks/keydown_events - Keyboard interception chain
//!
//! Keydown interception.
//!
//! Every keydown runs through a fixed chain of handlers before the browser
//! applies its native behavior. The first handler that claims the event ends
//! the chain. Handlers are a tagged enum rather than trait objects: the set is
//! closed, the order matters, and a handler is nothing but a predicate plus an
//! action.
//!
//! Order:
//! 1. [`KeyHandler::SuggestionNavigation`] owns Up/Down/Enter/Tab while the
//!    popup is visible, so Tab accepts a suggestion instead of indenting.
//! 2. [`KeyHandler::Tab`] inserts spaces.
//! 3. [`KeyHandler::SelfClosing`] inserts the closing bracket and lets the
//!    native keystroke insert the opening one in front of it.
//! 4. [`KeyHandler::NewlineIndent`] is disabled and always passes.

use overlay_edit_input::{EventResponse, Key, KeyEvent};

use crate::context::KeyContext;
use crate::suggestions::Direction;
use crate::surface::InputSurface;
use crate::sync::SyncEngine;
use crate::task_queue::DeferredTask;

/// Result of offering an event to a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// The handler claimed the event; the chain stops
    Yes,
    /// The handler ignored the event
    No,
}

/// Returns the closing character for an opening bracket.
pub fn closing_pair(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

/// Inserts `close` in place of the selection and leaves the caret in front
/// of it.
///
/// The caret collapses to where the selection started, so a native insertion
/// that follows lands before `close`. With `caret_offset > 1` the caret is
/// moved to `selection_start + caret_offset` on the next tick, once the
/// native insertion has gone through.
pub fn close_character(engine: &mut SyncEngine, close: &str, caret_offset: usize) {
    let selection = engine.surface().selection();
    let next = engine.document().spliced(selection, close);

    engine.set_text(&next);
    engine.surface_mut().set_caret(selection.start);

    if caret_offset > 1 {
        engine.post(DeferredTask::PlaceCaret(selection.start + caret_offset));
    }
}

/// A keydown handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyHandler {
    SuggestionNavigation,
    Tab,
    SelfClosing,
    /// Would carry the previous line's indentation onto a new line. Disabled:
    /// it never claims an event.
    NewlineIndent,
}

impl KeyHandler {
    /// Offers `event` to this handler.
    pub fn handle(&self, event: &KeyEvent, ctx: &mut KeyContext) -> Handled {
        match self {
            KeyHandler::SuggestionNavigation => navigate_suggestions(event, ctx),
            KeyHandler::Tab => insert_tab(event, ctx),
            KeyHandler::SelfClosing => insert_closing(event, ctx),
            KeyHandler::NewlineIndent => Handled::No,
        }
    }
}

fn navigate_suggestions(event: &KeyEvent, ctx: &mut KeyContext) -> Handled {
    if !ctx.suggestions.is_visible() {
        return Handled::No;
    }

    match event.key {
        Key::Up => {
            ctx.suggestions.navigate(Direction::Up);
        }
        Key::Down => {
            ctx.suggestions.navigate(Direction::Down);
        }
        Key::Return | Key::Tab => {
            ctx.chosen = ctx.suggestions.selected_index();
        }
        _ => return Handled::No,
    }

    ctx.response = EventResponse::consume();
    Handled::Yes
}

fn insert_tab(event: &KeyEvent, ctx: &mut KeyContext) -> Handled {
    if event.key != Key::Tab {
        return Handled::No;
    }

    let selection = ctx.engine.surface().selection();
    let spaces = " ".repeat(ctx.tab_size);
    let next = ctx.engine.document().spliced(selection, &spaces);

    ctx.engine.set_text(&next);
    ctx.engine
        .surface_mut()
        .set_caret(selection.start + ctx.tab_size);

    ctx.response = EventResponse::prevent_default();
    Handled::Yes
}

fn insert_closing(event: &KeyEvent, ctx: &mut KeyContext) -> Handled {
    let Key::Char(open) = event.key else {
        return Handled::No;
    };
    if event.modifiers.is_shortcut() {
        return Handled::No;
    }
    let Some(close) = closing_pair(open) else {
        return Handled::No;
    };

    let mut buf = [0u8; 4];
    close_character(ctx.engine, close.encode_utf8(&mut buf), 1);
    Handled::Yes
}

/// The handler chain run on every keydown.
#[derive(Debug, Clone)]
pub struct KeyboardInterceptor {
    chain: Vec<KeyHandler>,
}

impl KeyboardInterceptor {
    /// The standard chain.
    pub fn new() -> Self {
        Self::with_chain(vec![
            KeyHandler::SuggestionNavigation,
            KeyHandler::Tab,
            KeyHandler::SelfClosing,
            KeyHandler::NewlineIndent,
        ])
    }

    pub fn with_chain(chain: Vec<KeyHandler>) -> Self {
        Self { chain }
    }

    pub fn chain(&self) -> &[KeyHandler] {
        &self.chain
    }

    /// Runs `event` through the chain until a handler claims it.
    ///
    /// The DOM response is left in `ctx.response`.
    pub fn dispatch(&self, event: &KeyEvent, ctx: &mut KeyContext) -> Handled {
        for handler in &self.chain {
            if handler.handle(event, ctx) == Handled::Yes {
                tracing::debug!(?handler, key = ?event.key, response = ?ctx.response, "key claimed");
                return Handled::Yes;
            }
        }
        Handled::No
    }
}

impl Default for KeyboardInterceptor {
    fn default() -> Self {
        Self::new()
    }
}
