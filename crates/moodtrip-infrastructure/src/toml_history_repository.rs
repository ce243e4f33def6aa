//! TOML-backed AnswerHistoryRepository implementation.
//!
//! File location: `~/.config/moodtrip/history.toml`

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use moodtrip_core::MoodTripError;
use moodtrip_core::error::Result;
use moodtrip_core::insights::{AnswerHistoryEntry, AnswerHistoryRepository};

use crate::dto::AnswerHistoryDto;
use crate::paths::{MoodTripPaths, ServiceType};
use crate::storage::AtomicTomlFile;

/// Append-only answer log stored as `[[answer]]` tables.
#[derive(Clone)]
pub struct TomlAnswerHistoryRepository {
    storage: Arc<Mutex<AtomicTomlFile<AnswerHistoryDto>>>,
    /// Oldest entries beyond this count are dropped on append.
    max_entries: Option<usize>,
}

impl TomlAnswerHistoryRepository {
    pub fn new(paths: &MoodTripPaths, max_entries: Option<usize>) -> Result<Self> {
        let path = paths.get_path(ServiceType::AnswerHistory)?;
        Ok(Self::with_path(path, max_entries))
    }

    /// Creates a repository backed by a custom file (for testing).
    pub fn with_path(path: PathBuf, max_entries: Option<usize>) -> Self {
        Self {
            storage: Arc::new(Mutex::new(AtomicTomlFile::new(path))),
            max_entries,
        }
    }

    async fn run_blocking<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&AtomicTomlFile<AnswerHistoryDto>) -> Result<R> + Send + 'static,
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
}

#[async_trait]
impl AnswerHistoryRepository for TomlAnswerHistoryRepository {
    async fn append(&self, entry: AnswerHistoryEntry) -> Result<()> {
        let cap = self.max_entries;
        let category = entry.category_key.clone();
        let total = self
            .run_blocking(move |storage| {
                let dto = storage.update(AnswerHistoryDto::default(), |dto| {
                    dto.push(entry, cap);
                    Ok(())
                })?;
                Ok(dto.answers.len())
            })
            .await?;

        tracing::info!(category = %category, total, "Appended survey answer");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AnswerHistoryEntry>> {
        self.run_blocking(|storage| {
            Ok(storage
                .load()?
                .map(|dto| dto.answers)
                .unwrap_or_default())
        })
        .await
    }

    async fn clear(&self) -> Result<()> {
        self.run_blocking(|storage| {
            storage.update(AnswerHistoryDto::default(), |dto| {
                dto.answers.clear();
                Ok(())
            })?;
            Ok(())
        })
        .await?;
        tracing::info!("Cleared survey answer history");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty_history() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlAnswerHistoryRepository::with_path(temp_dir.path().join("history.toml"), None);
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_append_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlAnswerHistoryRepository::with_path(temp_dir.path().join("history.toml"), None);

        repo.append(AnswerHistoryEntry::new("calm", "Happy", 90)).await.unwrap();
        repo.append(AnswerHistoryEntry::new("family", "Alone", 50)).await.unwrap();
        repo.append(AnswerHistoryEntry::new("calm", "Okay", 60)).await.unwrap();

        let entries = repo.list_all().await.unwrap();
        let labels: Vec<&str> = entries.iter().map(|e| e.selected_label.as_str()).collect();
        assert_eq!(labels, vec!["Happy", "Alone", "Okay"]);
    }

    #[tokio::test]
    async fn test_retention_cap() {
        let temp_dir = TempDir::new().unwrap();
        let repo =
            TomlAnswerHistoryRepository::with_path(temp_dir.path().join("history.toml"), Some(2));

        for score in [30, 60, 90] {
            repo.append(AnswerHistoryEntry::new("calm", "x", score)).await.unwrap();
        }

        let scores: Vec<i32> = repo.list_all().await.unwrap().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![60, 90]);
    }

    #[tokio::test]
    async fn test_clear() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlAnswerHistoryRepository::with_path(temp_dir.path().join("history.toml"), None);
        repo.append(AnswerHistoryEntry::new("calm", "Happy", 90)).await.unwrap();

        repo.clear().await.unwrap();
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
