use std::sync::Arc;

use async_trait::async_trait;
use bestseo_core::Result;
use bestseo_core::suite::{SavedRecord, SavedResultRepository};
use tokio::sync::RwLock;

/// Saved-results list kept in memory.
///
/// Used when no data directory is wanted (ephemeral sessions, tests). Clones
/// share the same list.
#[derive(Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: SavedRecord> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Creates a repository pre-filled with `records`.
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Current contents, for inspection.
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }
}

impl<T: SavedRecord> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: SavedRecord> SavedResultRepository<T> for InMemoryRepository<T> {
    async fn load(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        let mut stored = self.records.write().await;
        *stored = records.to_vec();
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        Ok(())
    }
}
