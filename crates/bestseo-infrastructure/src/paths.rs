//! Path management for Best SEO configuration and saved results.
//!
//! ```text
//! ~/.config/bestseo/             # Config directory
//! └── config.toml                # Application configuration
//!
//! ~/.local/share/bestseo/        # Data directory
//! ├── savedKeywordAnalyses.json
//! ├── savedSerpAnalyses.json
//! ├── savedCompetitorKeywordAnalyses.json
//! └── savedContentBriefs.json
//! ```

use std::path::{Path, PathBuf};

use bestseo_core::{Result, SeoError};

const APP_DIR: &str = "bestseo";
const CONFIG_FILE: &str = "config.toml";

pub struct SeoPaths;

impl SeoPaths {
    /// Returns the configuration directory (e.g. `~/.config/bestseo/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SeoError::config("Cannot find configuration directory"))
    }

    /// Returns the data directory (e.g. `~/.local/share/bestseo/`).
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SeoError::config("Cannot find data directory"))
    }

    /// Returns the default configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Returns the file backing the saved-results list named `storage_key`.
    pub fn saved_list_file(data_dir: &Path, storage_key: &str) -> PathBuf {
        data_dir.join(format!("{storage_key}.json"))
    }
}
