//! Configuration service implementation.
//!
//! Loads [`MoodTripConfig`] from `~/.config/moodtrip/config.toml`.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use moodtrip_core::MoodTripError;
use moodtrip_core::config::MoodTripConfig;
use moodtrip_core::error::Result;

use crate::paths::{MoodTripPaths, ServiceType};
use crate::storage::AtomicTomlFile;

/// Loads and caches the configuration.
///
/// A missing file yields the defaults; a malformed one is a `Config` error.
#[derive(Clone)]
pub struct ConfigService {
    path: PathBuf,
    paths: MoodTripPaths,
    config: Arc<RwLock<Option<MoodTripConfig>>>,
}

impl ConfigService {
    pub fn new(paths: MoodTripPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Config)?;
        Ok(Self {
            path,
            paths,
            config: Arc::new(RwLock::new(None)),
        })
    }

    /// Gets the configuration, loading it from file on first access.
    pub fn get_config(&self) -> Result<MoodTripConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Forces a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    /// Writes the configuration and refreshes the cache.
    pub fn save_config(&self, config: &MoodTripConfig) -> Result<()> {
        AtomicTomlFile::new(self.path.clone()).save(config)?;
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = Some(config.clone());
        Ok(())
    }

    /// Catalog location: the configured path, or `places.json` in the data directory.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        match self.get_config()?.catalog_path {
            Some(path) => Ok(path),
            None => Ok(self.paths.get_path(ServiceType::Catalog)?),
        }
    }

    pub fn paths(&self) -> &MoodTripPaths {
        &self.paths
    }

    fn load_config(&self) -> Result<MoodTripConfig> {
        let file = AtomicTomlFile::<MoodTripConfig>::new(self.path.clone());
        let config = file
            .load()
            .map_err(|e| {
                MoodTripError::config(format!("Failed to load {}: {}", self.path.display(), e))
            })?
            .unwrap_or_default();
        tracing::debug!(path = %self.path.display(), "Loaded configuration");
        Ok(config)
    }
}
