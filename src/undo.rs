//! Bounded undo history of draft snapshots.

#[cfg(test)]
#[path = "undo_test.rs"]
mod undo_test;

use std::collections::VecDeque;

use crate::geom::LngLat;

/// LIFO of immutable draft snapshots. Pushing past the limit evicts the oldest.
#[derive(Debug, Clone)]
pub struct UndoStack {
    entries: VecDeque<Box<[LngLat]>>,
    limit: usize,
}

impl UndoStack {
    /// Create an empty stack holding at most `limit` snapshots (minimum 1).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self { entries: VecDeque::new(), limit }
    }

    pub fn push(&mut self, snapshot: Box<[LngLat]>) {
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    pub fn pop(&mut self) -> Option<Box<[LngLat]>> {
        self.entries.pop_back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Oldest retained snapshot.
    #[must_use]
    pub fn oldest(&self) -> Option<&[LngLat]> {
        self.entries.front().map(AsRef::as_ref)
    }
}
