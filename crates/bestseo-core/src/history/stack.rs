//! Linear undo/redo history with a present pointer.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::snapshot::Snapshot;

/// Ordered snapshots (oldest first) plus the index considered "now".
///
/// Entries after the present are the redo future, entries before it the undo
/// past. `push` drops the redo future before appending, so history stays a
/// single line: taking a new action after an undo discards the abandoned branch.
///
/// Invariant: `present` is `Some(i)` with `i < entries.len()` exactly when the
/// stack is non-empty.
#[derive(Debug, Clone)]
pub struct HistoryStack<S> {
    entries: VecDeque<Snapshot<S>>,
    present: Option<usize>,
    capacity: Option<NonZeroUsize>,
}

impl<S> HistoryStack<S> {
    /// Creates an empty, unbounded stack.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            present: None,
            capacity: None,
        }
    }

    /// Creates an empty stack that keeps at most `capacity` entries.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            present: None,
            capacity: Some(capacity),
        }
    }

    /// Appends `snapshot` as the new present.
    ///
    /// Any redo future is truncated first. When the stack grows past its
    /// capacity the oldest entry is evicted and the present shifts down with it.
    pub fn push(&mut self, snapshot: Snapshot<S>) {
        if let Some(present) = self.present {
            let keep = present + 1;
            if keep < self.entries.len() {
                tracing::debug!(
                    target: "history",
                    discarded = self.entries.len() - keep,
                    "Discarding redo future"
                );
                self.entries.truncate(keep);
            }
        }

        self.entries.push_back(snapshot);
        let mut present = self.entries.len() - 1;

        if let Some(capacity) = self.capacity {
            while self.entries.len() > capacity.get() {
                if let Some(evicted) = self.entries.pop_front() {
                    tracing::debug!(
                        target: "history",
                        sequence_id = evicted.sequence_id(),
                        "Evicting oldest history entry"
                    );
                }
                present -= 1;
            }
        }

        self.present = Some(present);
    }

    /// Moves the present one step into the past.
    ///
    /// Returns the snapshot that is now present, or `None` (leaving the stack
    /// untouched) when there is nothing to undo.
    pub fn step_back(&mut self) -> Option<&Snapshot<S>> {
        match self.present {
            Some(present) if present > 0 => {
                self.present = Some(present - 1);
                self.entries.get(present - 1)
            }
            _ => None,
        }
    }

    /// Moves the present one step into the redo future.
    ///
    /// Returns the snapshot that is now present, or `None` (leaving the stack
    /// untouched) when there is nothing to redo.
    pub fn step_forward(&mut self) -> Option<&Snapshot<S>> {
        match self.present {
            Some(present) if present + 1 < self.entries.len() => {
                self.present = Some(present + 1);
                self.entries.get(present + 1)
            }
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.present, Some(present) if present > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.present, Some(present) if present + 1 < self.entries.len())
    }

    /// The snapshot currently considered "now".
    pub fn present(&self) -> Option<&Snapshot<S>> {
        self.present.and_then(|present| self.entries.get(present))
    }

    pub fn present_index(&self) -> Option<usize> {
        self.present
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }

    /// Sequence ids of all entries, oldest first.
    pub fn sequence_ids(&self) -> Vec<u64> {
        self.entries.iter().map(Snapshot::sequence_id).collect()
    }

    /// Whether a snapshot with `sequence_id` is still held anywhere in history.
    pub fn contains(&self, sequence_id: u64) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.sequence_id() == sequence_id)
    }

    /// Drops every entry, returning the stack to its empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.present = None;
    }
}

impl<S> Default for HistoryStack<S> {
    fn default() -> Self {
        Self::new()
    }
}
