//! File-backed saved-results repository.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bestseo_core::suite::{SavedRecord, SavedResultRepository};
use bestseo_core::{Result, SeoError};
use serde::{Serialize, de::DeserializeOwned};

use super::atomic_json::AtomicJsonFile;
use crate::paths::SeoPaths;

/// Stores one saved-results list as a JSON array in `<data_dir>/<STORAGE_KEY>.json`.
///
/// File I/O runs on tokio's blocking pool.
pub struct JsonFileRepository<T> {
    file: Arc<AtomicJsonFile<Vec<T>>>,
}

impl<T> JsonFileRepository<T>
where
    T: SavedRecord + Serialize + DeserializeOwned,
{
    /// Creates a repository for `T`'s list inside `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self::at(SeoPaths::saved_list_file(data_dir, T::STORAGE_KEY))
    }

    /// Creates a repository backed by an explicit file.
    pub fn at(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicJsonFile::new(path)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn blocking<R, F>(&self, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&AtomicJsonFile<Vec<T>>) -> Result<R> + Send + 'static,
    {
        let file = Arc::clone(&self.file);
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| SeoError::internal(format!("Storage task failed: {}", e)))?
    }
}

#[async_trait]
impl<T> SavedResultRepository<T> for JsonFileRepository<T>
where
    T: SavedRecord + Serialize + DeserializeOwned,
{
    async fn load(&self) -> Result<Vec<T>> {
        let records = self
            .blocking(|file| file.load())
            .await?
            .unwrap_or_default();
        tracing::debug!(
            storage_key = T::STORAGE_KEY,
            count = records.len(),
            "Loaded saved results"
        );
        Ok(records)
    }

    async fn save(&self, records: &[T]) -> Result<()> {
        let records = records.to_vec();
        let count = records.len();
        self.blocking(move |file| file.save(&records)).await?;
        tracing::debug!(storage_key = T::STORAGE_KEY, count, "Saved results");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.blocking(|file| file.remove()).await?;
        tracing::debug!(storage_key = T::STORAGE_KEY, "Cleared saved results");
        Ok(())
    }
}
