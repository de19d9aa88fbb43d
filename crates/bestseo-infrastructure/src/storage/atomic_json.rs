//! Atomic JSON file operations.
//!
//! Writes go to a temporary file in the same directory, are synced, then
//! renamed over the target. An exclusive lock file serializes writers.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use bestseo_core::{Result, SeoError};
use serde::{Serialize, de::DeserializeOwned};

/// A handle to a JSON file that is replaced atomically on every save.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// - `Ok(None)`: file doesn't exist or is blank
    /// - `Err`: read failure or malformed JSON
    pub fn load(&self) -> Result<Option<T>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Serializes `data` and atomically replaces the file with it.
    pub fn save(&self, data: &T) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Deletes the file. Missing files are not an error.
    pub fn remove(&self) -> Result<()> {
        let _lock = FileLock::acquire(&self.path)?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SeoError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SeoError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Exclusive lock guard, released (and its lock file removed) on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| SeoError::io(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Best effort
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<Entry>>::new(temp_dir.path().join("entries.json"));

        let entries = vec![Entry {
            name: "test".to_string(),
            count: 42,
        }];
        file.save(&entries).unwrap();

        assert_eq!(file.load().unwrap(), Some(entries));
        assert!(!temp_dir.path().join(".entries.json.tmp").exists());
        assert!(!temp_dir.path().join("entries.lock").exists());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<Entry>>::new(temp_dir.path().join("missing.json"));
        assert_eq!(file.load().unwrap(), None);
    }

    #[test]
    fn test_load_blank_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        let file = AtomicJsonFile::<Vec<Entry>>::new(path);
        assert_eq!(file.load().unwrap(), None);
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[{\"name\": ").unwrap();
        let file = AtomicJsonFile::<Vec<Entry>>::new(path);
        assert!(file.load().unwrap_err().is_serialization());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("deeper").join("list.json");
        let file = AtomicJsonFile::<Vec<Entry>>::new(path.clone());
        file.save(&Vec::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<Vec<Entry>>::new(temp_dir.path().join("gone.json"));
        file.save(&Vec::new()).unwrap();
        file.remove().unwrap();
        file.remove().unwrap();
        assert_eq!(file.load().unwrap(), None);
    }
}
