//! Unified path management for MoodTrip files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/moodtrip/          # Config directory
//! ├── config.toml              # Application configuration
//! ├── preferences.toml         # Bookmarked / visited place ids
//! └── history.toml             # Append-only survey answer history
//!
//! ~/.local/share/moodtrip/     # Data directory
//! └── places.json              # Place catalog
//! ```
//!
//! When a base directory override is given, every file lives directly in it.

use std::path::PathBuf;

const APP_DIR: &str = "moodtrip";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for moodtrip_core::MoodTripError {
    fn from(e: PathError) -> Self {
        moodtrip_core::MoodTripError::config(e.to_string())
    }
}

/// Files managed by MoodTrip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Config,
    Preferences,
    AnswerHistory,
    Catalog,
}

impl ServiceType {
    fn file_name(self) -> &'static str {
        match self {
            ServiceType::Config => "config.toml",
            ServiceType::Preferences => "preferences.toml",
            ServiceType::AnswerHistory => "history.toml",
            ServiceType::Catalog => "places.json",
        }
    }

    fn is_data(self) -> bool {
        matches!(self, ServiceType::Catalog)
    }
}

/// Resolves file locations, optionally under a custom base directory.
#[derive(Debug, Clone, Default)]
pub struct MoodTripPaths {
    base_dir: Option<PathBuf>,
}

impl MoodTripPaths {
    /// `None` uses the platform config/data directories.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the file path for a service.
    pub fn get_path(&self, service: ServiceType) -> Result<PathBuf, PathError> {
        let dir = if service.is_data() {
            self.data_dir()?
        } else {
            self.config_dir()?
        };
        Ok(dir.join(service.file_name()))
    }
}
