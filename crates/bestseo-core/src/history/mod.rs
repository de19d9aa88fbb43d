//! Cross-panel undo/redo history.
//!
//! Panels never share state with each other directly. They hand whole-state
//! copies to a single [`HistoryController`], which keeps a linear history of
//! [`Snapshot`]s and gives independent copies back on undo and redo.

mod controller;
mod snapshot;
mod stack;

pub use controller::{HistoryAction, HistoryController, HistoryEvent, HistoryStatus};
pub use snapshot::{Snapshot, SnapshotStore};
pub use stack::HistoryStack;
