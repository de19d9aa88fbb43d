//! The public undo/redo capability shared by every panel.

use std::num::NonZeroUsize;

use serde::Serialize;
use tokio::sync::mpsc;

use super::snapshot::SnapshotStore;
use super::stack::HistoryStack;

/// What moved the present pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    Recorded,
    Undone,
    Redone,
    Cleared,
}

/// Event sent to subscribers whenever the present snapshot changes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    pub action: HistoryAction,
    /// Sequence id of the new present, `None` once history is cleared.
    pub sequence_id: Option<u64>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Number of snapshots currently held.
    pub depth: usize,
    pub timestamp: String,
}

/// Read-only summary used to render the Undo/Redo controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStatus {
    pub can_undo: bool,
    pub can_redo: bool,
    pub depth: usize,
    pub present_index: Option<usize>,
    pub capacity: Option<usize>,
}

/// Mediates between state owners and the history stack.
///
/// The stack is a private field: the only way to change it is through
/// [`record`](Self::record), [`undo`](Self::undo), [`redo`](Self::redo) and
/// [`clear`](Self::clear). Every call runs to completion on the caller's
/// thread; nothing here awaits or locks.
///
/// # Example
///
/// ```
/// use bestseo_core::history::HistoryController;
///
/// let mut history = HistoryController::new();
/// history.record(&1);
/// history.record(&2);
/// assert_eq!(history.undo(), Some(1));
/// assert_eq!(history.redo(), Some(2));
/// assert_eq!(history.redo(), None);
/// ```
#[derive(Debug)]
pub struct HistoryController<S> {
    store: SnapshotStore,
    stack: HistoryStack<S>,
    subscribers: Vec<mpsc::UnboundedSender<HistoryEvent>>,
}

impl<S: Clone> HistoryController<S> {
    /// Creates a controller with unbounded history.
    pub fn new() -> Self {
        Self::from_stack(HistoryStack::new())
    }

    /// Creates a controller that keeps at most `capacity` snapshots.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self::from_stack(HistoryStack::with_capacity(capacity))
    }

    /// Creates a controller from an optional capacity, as read from config.
    pub fn bounded(capacity: Option<NonZeroUsize>) -> Self {
        match capacity {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        }
    }

    fn from_stack(stack: HistoryStack<S>) -> Self {
        Self {
            store: SnapshotStore::new(),
            stack,
            subscribers: Vec::new(),
        }
    }

    /// Captures `state` and makes it the new present, discarding any redo future.
    pub fn record(&mut self, state: &S) {
        let snapshot = self.store.capture(state);
        let sequence_id = snapshot.sequence_id();
        self.stack.push(snapshot);
        tracing::debug!(
            target: "history",
            sequence_id,
            depth = self.stack.len(),
            "Recorded snapshot"
        );
        self.notify(HistoryAction::Recorded);
    }

    /// Steps back one snapshot and returns an independent copy of it.
    ///
    /// Returns `None` without touching anything when there is nothing to undo.
    /// The caller applies the returned value as its new live state.
    pub fn undo(&mut self) -> Option<S> {
        let restored = {
            let snapshot = self.stack.step_back()?;
            tracing::debug!(
                target: "history",
                sequence_id = snapshot.sequence_id(),
                "Undo"
            );
            self.store.restore(snapshot)
        };
        self.notify(HistoryAction::Undone);
        Some(restored)
    }

    /// Steps forward one snapshot and returns an independent copy of it.
    ///
    /// Returns `None` without touching anything when there is nothing to redo.
    pub fn redo(&mut self) -> Option<S> {
        let restored = {
            let snapshot = self.stack.step_forward()?;
            tracing::debug!(
                target: "history",
                sequence_id = snapshot.sequence_id(),
                "Redo"
            );
            self.store.restore(snapshot)
        };
        self.notify(HistoryAction::Redone);
        Some(restored)
    }

    /// Independent copy of the present snapshot, if any.
    pub fn present(&self) -> Option<S> {
        self.stack
            .present()
            .map(|snapshot| self.store.restore(snapshot))
    }

    /// Drops all history. Subscribers are told both flags are now false.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.notify(HistoryAction::Cleared);
    }
}

impl<S> HistoryController<S> {
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    pub fn status(&self) -> HistoryStatus {
        HistoryStatus {
            can_undo: self.stack.can_undo(),
            can_redo: self.stack.can_redo(),
            depth: self.stack.len(),
            present_index: self.stack.present_index(),
            capacity: self.stack.capacity().map(NonZeroUsize::get),
        }
    }

    /// Sequence id of the present snapshot.
    pub fn present_sequence_id(&self) -> Option<u64> {
        self.stack.present().map(|snapshot| snapshot.sequence_id())
    }

    /// Whether a snapshot with `sequence_id` is still anywhere in history.
    pub fn contains(&self, sequence_id: u64) -> bool {
        self.stack.contains(sequence_id)
    }

    /// Registers a new subscriber.
    ///
    /// The receiver gets one [`HistoryEvent`] per change of the present.
    /// Dropping it unsubscribes.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<HistoryEvent> {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, action: HistoryAction) {
        let event = HistoryEvent {
            action,
            sequence_id: self.present_sequence_id(),
            can_undo: self.stack.can_undo(),
            can_redo: self.stack.can_redo(),
            depth: self.stack.len(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        // A failed send means the receiver was dropped
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }
}

impl<S: PartialEq> HistoryController<S> {
    /// Whether `state` is value-equal to the present snapshot.
    ///
    /// Lets callers skip recording a state that would not change anything.
    pub fn is_present(&self, state: &S) -> bool {
        self.stack
            .present()
            .is_some_and(|snapshot| snapshot.payload() == state)
    }
}

impl<S: Clone> Default for HistoryController<S> {
    fn default() -> Self {
        Self::new()
    }
}
