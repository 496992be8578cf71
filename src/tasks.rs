//! Deferred UI work
//!
//! Some state changes are queued instead of applied inside the key handler
//! that requested them. The event loop drains the queue in FIFO order once
//! per iteration, before the next frame is drawn.

use std::collections::VecDeque;

/// A UI mutation waiting for the next loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTask {
    OpenDrawer,
}

#[derive(Debug, Default)]
pub struct UiQueue {
    pending: VecDeque<UiTask>,
}

impl UiQueue {
    pub fn schedule(&mut self, task: UiTask) {
        tracing::trace!(?task, "scheduled");
        self.pending.push_back(task);
    }

    /// Take every pending task, oldest first
    pub fn drain(&mut self) -> Vec<UiTask> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
