//! Configuration service implementation.
//!
//! Loads [`SeoConfig`] from `config.toml` (by default
//! `~/.config/bestseo/config.toml`) and caches it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use bestseo_core::Result;
use bestseo_core::config::SeoConfig;

use crate::paths::SeoPaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<SeoConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the platform default config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(SeoPaths::config_file()?))
    }

    /// Creates a service reading `path`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration, loading it on first access.
    ///
    /// A missing file yields the defaults. A malformed file is an error.
    pub fn get_config(&self) -> Result<SeoConfig> {
        if let Ok(cached) = self.config.read() {
            if let Some(config) = cached.as_ref() {
                return Ok(config.clone());
            }
        }

        let loaded = Self::load_from(&self.path)?;

        if let Ok(mut cache) = self.config.write() {
            *cache = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.config.write() {
            *cache = None;
        }
    }

    fn load_from(path: &Path) -> Result<SeoConfig> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                return Ok(SeoConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        let config: SeoConfig = toml::from_str(&content)?;
        tracing::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }
}
