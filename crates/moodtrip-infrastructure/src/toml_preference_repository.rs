//! TOML-backed PreferenceRepository implementation.
//!
//! File location: `~/.config/moodtrip/preferences.toml`

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use moodtrip_core::MoodTripError;
use moodtrip_core::error::Result;
use moodtrip_core::place::PlaceId;
use moodtrip_core::preference::{PreferenceKind, PreferenceRepository};

use crate::dto::PreferencesDto;
use crate::paths::{MoodTripPaths, ServiceType};
use crate::storage::AtomicTomlFile;

/// Stores both preference sets in one TOML file.
///
/// Reads go straight to disk, so changes made by another process are seen.
/// Writes run as locked read-modify-write cycles; within the process they are
/// additionally serialized by the storage mutex.
#[derive(Clone)]
pub struct TomlPreferenceRepository {
    storage: Arc<Mutex<AtomicTomlFile<PreferencesDto>>>,
}

impl TomlPreferenceRepository {
    /// Creates a repository at the default location.
    pub fn new(paths: &MoodTripPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Preferences)?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository backed by a custom file (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            storage: Arc::new(Mutex::new(AtomicTomlFile::new(path))),
        }
    }

    async fn run_blocking<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&AtomicTomlFile<PreferencesDto>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || {
            let storage = storage.blocking_lock();
            f(&storage)
        })
        .await
        .map_err(|e| MoodTripError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn load(&self) -> Result<PreferencesDto> {
        self.run_blocking(|storage| Ok(storage.load()?.unwrap_or_default()))
            .await
    }
}

#[async_trait]
impl PreferenceRepository for TomlPreferenceRepository {
    async fn list_ids(&self, kind: PreferenceKind) -> Result<Vec<PlaceId>> {
        Ok(self.load().await?.set(kind).ids().to_vec())
    }

    async fn contains(&self, kind: PreferenceKind, id: PlaceId) -> Result<bool> {
        Ok(self.load().await?.set(kind).contains(id))
    }

    async fn add(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        let (dto, inserted) = self
            .run_blocking(move |storage| {
                let mut inserted = false;
                let dto = storage.update(PreferencesDto::default(), |dto| {
                    inserted = dto.modify(kind, |set| set.insert(id));
                    Ok(())
                })?;
                Ok((dto, inserted))
            })
            .await?;

        if inserted {
            tracing::info!(%kind, place_id = id, total = dto.set(kind).len(), "Marked place");
        }
        Ok(())
    }

    async fn remove(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        let (dto, removed) = self
            .run_blocking(move |storage| {
                let mut removed = false;
                let dto = storage.update(PreferencesDto::default(), |dto| {
                    removed = dto.modify(kind, |set| set.remove(id));
                    Ok(())
                })?;
                Ok((dto, removed))
            })
            .await?;

        if removed {
            tracing::info!(%kind, place_id = id, total = dto.set(kind).len(), "Unmarked place");
        }
        Ok(())
    }
}
