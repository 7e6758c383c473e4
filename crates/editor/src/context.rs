// Chunk: docs/chunks/keydown_events - Keyboard interception chain
//!
//! Context handed to key handlers.
//!
//! Handlers mutate editor state through this context and record what the
//! host must do with the DOM event in `response`. Choosing a suggestion is
//! recorded rather than reported directly, so the host callback runs after
//! the handler chain has released its borrows.

use overlay_edit_input::EventResponse;

use crate::suggestions::SuggestionPopup;
use crate::sync::SyncEngine;

pub struct KeyContext<'a> {
    /// The synchronization engine (document, surface, overlay)
    pub engine: &'a mut SyncEngine,
    /// The suggestion popup
    pub suggestions: &'a mut SuggestionPopup,
    /// Spaces inserted per Tab press
    pub tab_size: usize,
    /// What to do with the DOM event; passes unless a handler says otherwise
    pub response: EventResponse,
    /// Index of a suggestion chosen during this event
    pub chosen: Option<usize>,
}

impl<'a> KeyContext<'a> {
    pub fn new(
        engine: &'a mut SyncEngine,
        suggestions: &'a mut SuggestionPopup,
        tab_size: usize,
    ) -> Self {
        Self {
            engine,
            suggestions,
            tab_size,
            response: EventResponse::pass(),
            chosen: None,
        }
    }
}
