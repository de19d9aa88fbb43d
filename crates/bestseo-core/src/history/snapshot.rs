//! Snapshots and the store that produces them.

use std::sync::Arc;

/// An immutable copy of the whole application state at one point in history.
///
/// The payload is owned by the snapshot alone. Cloning a `Snapshot` shares the
/// same immutable payload, which is safe because nothing can mutate it; callers
/// that want a value they can modify go through [`SnapshotStore::restore`].
#[derive(Debug)]
pub struct Snapshot<S> {
    sequence_id: u64,
    payload: Arc<S>,
}

impl<S> Snapshot<S> {
    /// Position of this snapshot in capture order. Unique per store.
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    /// Read-only view of the captured state.
    pub fn payload(&self) -> &S {
        &self.payload
    }
}

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            sequence_id: self.sequence_id,
            payload: Arc::clone(&self.payload),
        }
    }
}

/// Produces snapshots with monotonically increasing sequence ids and hands
/// independent copies back out of them.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    next_sequence_id: u64,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            next_sequence_id: 1,
        }
    }

    /// Copies `state` into a new snapshot.
    ///
    /// The live value is only borrowed; the snapshot owns a fresh clone, so
    /// later mutation of the live state cannot reach it.
    pub fn capture<S: Clone>(&mut self, state: &S) -> Snapshot<S> {
        let sequence_id = self.next_sequence_id;
        self.next_sequence_id += 1;
        Snapshot {
            sequence_id,
            payload: Arc::new(state.clone()),
        }
    }

    /// Copies the payload of `snapshot` out into a value the caller owns.
    pub fn restore<S: Clone>(&self, snapshot: &Snapshot<S>) -> S {
        S::clone(&snapshot.payload)
    }

    /// Sequence id the next capture will receive.
    pub fn next_sequence_id(&self) -> u64 {
        self.next_sequence_id
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}
