// Chunk: docs/chunks/overlay_surface - Transparent textarea over highlighted overlay
// Chunk: docs/chunks/deferred_sync - Deferred notification queue
//!
//! The text synchronization engine.
//!
//! [`SyncEngine`] owns the document buffer and is its only writer. Every
//! write goes through [`SyncEngine::set_text`] (programmatic updates) or
//! [`SyncEngine::on_input`] (native edits already applied to the surface).
//! Both re-render the overlay synchronously, so the overlay is always a
//! projection of the current buffer, and both post the host notification and
//! the line recount to the deferred queue.

use std::rc::Rc;

use overlay_edit_buffer::Document;
use overlay_edit_input::ScrollPosition;
use overlay_edit_syntax::Highlighter;

use crate::overlay::{LineGutter, OverlayLayer};
use crate::surface::{InputSurface, TextArea};
use crate::task_queue::{DeferredTask, TaskQueue};

pub struct SyncEngine {
    document: Document,
    surface: TextArea,
    overlay: OverlayLayer,
    gutter: Option<LineGutter>,
    line_count: usize,
    language: String,
    highlighter: Rc<dyn Highlighter>,
    tasks: TaskQueue,
}

impl SyncEngine {
    /// Creates an engine with an empty document.
    ///
    /// `line_numbers` decides whether a gutter exists at all.
    pub fn new(language: &str, highlighter: Rc<dyn Highlighter>, line_numbers: bool) -> Self {
        Self {
            document: Document::new(),
            surface: TextArea::new(),
            overlay: OverlayLayer::new(),
            gutter: line_numbers.then(LineGutter::new),
            line_count: 1,
            language: language.to_string(),
            highlighter,
            tasks: TaskQueue::new(),
        }
    }

    /// Replaces the document and writes it to the surface.
    ///
    /// The surface's selection collapses to the end, as assigning a
    /// textarea's value does; callers that need the caret elsewhere place it
    /// afterwards.
    pub fn set_text(&mut self, text: &str) {
        self.document.replace(text);
        self.surface.set_value(text);
        self.commit();
    }

    /// Pulls the surface's value into the document after a native edit.
    pub fn on_input(&mut self) {
        self.document.replace(self.surface.value());
        self.commit();
    }

    fn commit(&mut self) {
        self.render();
        self.tasks.post(DeferredTask::NotifyUpdate);
        self.tasks.post(DeferredTask::RecountLines);
    }

    /// Re-renders the overlay from the current document.
    pub fn render(&mut self) {
        self.overlay
            .render(self.document.as_str(), &self.language, self.highlighter.as_ref());
    }

    /// Switches the highlighting language and re-renders.
    pub fn set_language(&mut self, language: &str) {
        self.language = language.to_string();
        self.render();
    }

    /// Recomputes the line count and refreshes the gutter.
    pub fn recount_lines(&mut self) {
        self.line_count = self.document.line_count();
        if let Some(gutter) = self.gutter.as_mut() {
            gutter.set_line_count(self.line_count);
        }
    }

    /// Mirrors the surface's scroll offsets onto the overlay and gutter.
    pub fn mirror_scroll(&mut self, scroll: ScrollPosition) {
        self.surface.set_scroll(scroll);
        self.overlay.mirror_scroll(scroll);
        if let Some(gutter) = self.gutter.as_mut() {
            gutter.mirror_scroll(scroll);
        }
    }

    /// Posts an arbitrary deferred task.
    pub fn post(&mut self, task: DeferredTask) {
        self.tasks.post(task);
    }

    /// Takes the tasks due on this tick.
    pub fn take_tasks(&mut self) -> Vec<DeferredTask> {
        self.tasks.take()
    }

    pub fn pending_tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    pub fn text(&self) -> &str {
        self.document.as_str()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn surface(&self) -> &TextArea {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut TextArea {
        &mut self.surface
    }

    pub fn overlay(&self) -> &OverlayLayer {
        &self.overlay
    }

    pub fn gutter(&self) -> Option<&LineGutter> {
        self.gutter.as_ref()
    }

    /// Line count as of the last recount.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn highlighter(&self) -> &Rc<dyn Highlighter> {
        &self.highlighter
    }
}
