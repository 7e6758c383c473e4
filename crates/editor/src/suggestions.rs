// Chunk: docs/chunks/suggestion_popup - Caret-anchored suggestion popup
//!
//! The suggestion popup's interaction model.
//!
//! [`SuggestionPopup`] holds the candidates the host supplied, the highlighted
//! index, the popup's position and its rendered list markup. It knows nothing
//! about how candidates are produced or what choosing one means; choosing is
//! reported back to the caller, which forwards the candidate to the host.
//!
//! # States
//!
//! - **Hidden**: no candidates, no selection.
//! - **Visible**: a non-empty list with a selection in `0..len`.
//!
//! Installing a non-empty list always enters Visible with the selection reset
//! to 0. Navigation moves the selection with wraparound and leaves the
//! position alone. Choosing a candidate does not hide the popup; the host
//! hides it by installing an empty list.
//!
//! # Example
//!
//! ```ignore
//! let mut popup = SuggestionPopup::new();
//! popup.install(vec![Candidate::new("len", "fn len(&self)")], PopupPosition::default());
//! assert!(popup.is_visible());
//! popup.navigate(Direction::Up);
//! assert_eq!(popup.selected_index(), Some(0));
//! ```

use overlay_edit_syntax::push_escaped;
use serde::{Deserialize, Serialize};

use crate::popup_layout::PopupPosition;

/// One suggestion offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Candidate {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Parses a JSON array of `{"title", "description"}` records.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Candidate>> {
        serde_json::from_str(json)
    }
}

/// Visibility of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    Hidden,
    Visible,
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct SuggestionPopup {
    candidates: Vec<Candidate>,
    /// Index of the highlighted candidate; `Some` iff visible.
    selected_index: Option<usize>,
    position: PopupPosition,
    markup: String,
}

impl Default for SuggestionPopup {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionPopup {
    /// Creates a hidden popup.
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            selected_index: None,
            position: PopupPosition::default(),
            markup: String::new(),
        }
    }

    pub fn state(&self) -> PopupState {
        if self.selected_index.is_some() {
            PopupState::Visible
        } else {
            PopupState::Hidden
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state() == PopupState::Visible
    }

    /// Installs a new candidate list at `position`.
    ///
    /// A non-empty list shows the popup with the first candidate selected;
    /// an empty list hides it.
    pub fn install(&mut self, candidates: Vec<Candidate>, position: PopupPosition) {
        if candidates.is_empty() {
            self.hide();
            return;
        }

        self.candidates = candidates;
        self.selected_index = Some(0);
        self.position = position;
        self.render();
        tracing::debug!(
            count = self.candidates.len(),
            top = position.top,
            left = position.left,
            "suggestions shown"
        );
    }

    /// Hides the popup and drops its candidates.
    pub fn hide(&mut self) {
        if self.is_visible() {
            tracing::debug!("suggestions hidden");
        }
        self.candidates.clear();
        self.selected_index = None;
        self.markup.clear();
    }

    /// Moves the selection one step with wraparound.
    ///
    /// Returns the new index, or `None` when hidden.
    pub fn navigate(&mut self, direction: Direction) -> Option<usize> {
        let index = self.selected_index?;
        let len = self.candidates.len();
        if len == 0 {
            return None;
        }

        let next = match direction {
            Direction::Up => {
                if index == 0 {
                    len - 1
                } else {
                    index - 1
                }
            }
            Direction::Down => {
                if index + 1 >= len {
                    0
                } else {
                    index + 1
                }
            }
        };

        self.select(next);
        Some(next)
    }

    /// Highlights the candidate at `index`.
    ///
    /// Indices without a candidate are ignored.
    pub fn select(&mut self, index: usize) {
        if self.selected_index.is_none() || index >= self.candidates.len() {
            return;
        }
        self.selected_index = Some(index);
        self.render();
    }

    /// The highlighted candidate, if visible.
    pub fn selected(&self) -> Option<&Candidate> {
        self.selected_index.and_then(|index| self.candidates.get(index))
    }

    /// The candidate at `index`, if there is one.
    pub fn candidate(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn position(&self) -> PopupPosition {
        self.position
    }

    /// The list markup; empty when hidden.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    fn render(&mut self) {
        let mut html = String::from("<ul>");
        for (index, candidate) in self.candidates.iter().enumerate() {
            let selected = if Some(index) == self.selected_index {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!(
                "<li class=\"index-{}{}\" idx=\"{}\"><span class=\"title\">",
                index, selected, index
            ));
            push_escaped(&mut html, &candidate.title);
            html.push_str("</span><span class=\"description\">");
            push_escaped(&mut html, &candidate.description);
            html.push_str("</span></li>");
        }
        html.push_str("</ul>");
        self.markup = html;
    }
}
