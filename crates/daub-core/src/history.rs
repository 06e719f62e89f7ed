//! Fixed-capacity undo history.

use crate::stroke::StrokeId;
use std::collections::VecDeque;

/// Number of strokes remembered for undo by default.
pub const DEFAULT_UNDO_CAPACITY: usize = 20;

/// A ring of the most recently committed stroke ids, newest at the back.
///
/// Pushing past capacity silently evicts the oldest id; an evicted stroke
/// can no longer be undone. There is no redo counterpart. The ring holds
/// ids only — the strokes themselves stay in the document until undone.
#[derive(Debug, Clone)]
pub struct StrokeHistory {
    entries: VecDeque<StrokeId>,
    capacity: usize,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_UNDO_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "undo capacity must be positive");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a committed stroke, evicting the oldest entry when full.
    pub fn push(&mut self, id: StrokeId) {
        self.entries.push_back(id);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Remove and return the newest id, or `None` if nothing is undoable.
    pub fn pop_most_recent(&mut self) -> Option<StrokeId> {
        self.entries.pop_back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Undoable ids, oldest first.
    pub fn ids(&self) -> impl Iterator<Item = &StrokeId> {
        self.entries.iter()
    }
}

impl Default for StrokeHistory {
    fn default() -> Self {
        Self::new()
    }
}
