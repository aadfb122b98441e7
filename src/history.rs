//! Linear undo/redo history over element-collection snapshots.
//!
//! A snapshot is a structural copy of the full element collection, taken by
//! the engine immediately before every mutating operation. `History` never
//! inspects snapshot contents; it only moves them between two stacks.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::VecDeque;

use crate::consts::HISTORY_CAP;
use crate::doc::CanvasElement;

/// An immutable structural copy of the element collection at one instant.
pub type Snapshot = Vec<CanvasElement>;

/// Two-stack linear (non-branching) undo/redo history.
///
/// `past` holds up to [`HISTORY_CAP`] checkpoints with the oldest evicted
/// first. `future` holds states stepped back from; any new checkpoint
/// discards it, so a redo after fresh edits is a no-op.
pub struct History {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self { past: VecDeque::new(), future: Vec::new() }
    }

    /// Record `snapshot` as the state to return to on the next undo.
    ///
    /// Evicts the oldest entry once the cap is exceeded and unconditionally
    /// invalidates the redo stack.
    pub fn checkpoint(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        if self.past.len() > HISTORY_CAP {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back one checkpoint.
    ///
    /// `current` is stored for redo and the snapshot to restore is returned.
    /// Returns `None` (keeping `current` out of the redo stack) when there is
    /// nothing to undo.
    #[must_use]
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.past.pop_back()?;
        self.future.push(current);
        Some(snapshot)
    }

    /// Step forward one undone checkpoint.
    ///
    /// `current` is pushed back onto the past stack (respecting the cap) and
    /// the snapshot to restore is returned. Returns `None` when there is
    /// nothing to redo.
    #[must_use]
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snapshot = self.future.pop()?;
        self.past.push_back(current);
        if self.past.len() > HISTORY_CAP {
            self.past.pop_front();
        }
        Some(snapshot)
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of retained undo checkpoints.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of retained redo entries.
    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
