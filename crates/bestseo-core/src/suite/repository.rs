//! Saved-results repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::suite::model::SavedRecord;

/// Storage for one list of saved records.
///
/// Lists are loaded and saved whole; the tool suite owns the in-memory copy
/// and writes it back after every change.
#[async_trait]
pub trait SavedResultRepository<T: SavedRecord>: Send + Sync {
    /// Loads the list, newest first. A list that was never saved is empty.
    async fn load(&self) -> Result<Vec<T>>;

    /// Replaces the stored list with `records`.
    async fn save(&self, records: &[T]) -> Result<()>;

    /// Removes the stored list entirely.
    async fn clear(&self) -> Result<()>;
}
