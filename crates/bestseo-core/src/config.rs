//! Configuration model.
//!
//! ```toml
//! [history]
//! max_entries = 100
//! unbounded = false
//!
//! [storage]
//! data_dir = "/home/me/.local/share/bestseo"
//! ```

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeoError};

pub const DEFAULT_MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Maximum number of snapshots kept before the oldest is evicted.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Ignore `max_entries` and keep every snapshot for the session.
    #[serde(default)]
    pub unbounded: bool,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_HISTORY_ENTRIES
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_HISTORY_ENTRIES,
            unbounded: false,
        }
    }
}

impl HistoryConfig {
    /// The history capacity, `None` when unbounded.
    ///
    /// A zero capacity cannot hold the present snapshot and is rejected.
    pub fn capacity(&self) -> Result<Option<NonZeroUsize>> {
        if self.unbounded {
            return Ok(None);
        }
        NonZeroUsize::new(self.max_entries)
            .map(Some)
            .ok_or_else(|| SeoError::config("history.max_entries must be at least 1"))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the saved-results lists. Platform data dir when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
