// Chunk: docs/chunks/deferred_sync - Deferred notification queue
//! Deferred work queue.
//!
//! Host notifications and line recounts must not run synchronously with the
//! edit that caused them: the browser has to finish laying out the textarea
//! first. They are posted here instead and run when the host calls
//! [`CodeEditor::run_deferred`](crate::CodeEditor::run_deferred) on its next
//! tick (a zero-delay timeout or animation frame).
//!
//! The queue is drained as a snapshot: anything posted while a batch runs
//! waits for the following tick. Tasks carry no text; they read the current
//! buffer when they run, so a burst of edits notifies with the latest content.

use std::collections::VecDeque;

/// A unit of deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Invoke the host's update callback with the current buffer
    NotifyUpdate,
    /// Recompute the line count and refresh the gutter
    RecountLines,
    /// Collapse the caret at the given char offset
    PlaceCaret(usize),
}

/// FIFO of posted tasks.
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: VecDeque<DeferredTask>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a task for the next tick.
    pub fn post(&mut self, task: DeferredTask) {
        tracing::trace!(?task, "posted deferred task");
        self.pending.push_back(task);
    }

    /// Takes every task posted so far, in posting order.
    pub fn take(&mut self) -> Vec<DeferredTask> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Iterates the pending tasks without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &DeferredTask> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_preserves_order() {
        let mut queue = TaskQueue::new();
        queue.post(DeferredTask::NotifyUpdate);
        queue.post(DeferredTask::RecountLines);
        queue.post(DeferredTask::PlaceCaret(3));

        assert_eq!(
            queue.take(),
            vec![
                DeferredTask::NotifyUpdate,
                DeferredTask::RecountLines,
                DeferredTask::PlaceCaret(3)
            ]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn posts_after_take_wait_for_next_take() {
        let mut queue = TaskQueue::new();
        queue.post(DeferredTask::NotifyUpdate);
        let first = queue.take();
        queue.post(DeferredTask::RecountLines);

        assert_eq!(first, vec![DeferredTask::NotifyUpdate]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next(), Some(&DeferredTask::RecountLines));
    }

    #[test]
    fn take_on_empty_queue() {
        let mut queue = TaskQueue::new();
        assert!(queue.take().is_empty());
    }
}
