//! In-memory repositories.
//!
//! Used by tests and by callers that do not want anything written to disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use moodtrip_core::error::Result;
use moodtrip_core::insights::{AnswerHistoryEntry, AnswerHistoryRepository};
use moodtrip_core::place::PlaceId;
use moodtrip_core::preference::{PreferenceKind, PreferenceRepository, PreferenceSet};

#[derive(Clone, Default)]
pub struct InMemoryPreferenceRepository {
    sets: Arc<Mutex<HashMap<PreferenceKind, PreferenceSet>>>,
}

impl InMemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn list_ids(&self, kind: PreferenceKind) -> Result<Vec<PlaceId>> {
        let sets = self.sets.lock().await;
        Ok(sets.get(&kind).map(|s| s.ids().to_vec()).unwrap_or_default())
    }

    async fn contains(&self, kind: PreferenceKind, id: PlaceId) -> Result<bool> {
        let sets = self.sets.lock().await;
        Ok(sets.get(&kind).is_some_and(|s| s.contains(id)))
    }

    async fn add(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        self.sets.lock().await.entry(kind).or_default().insert(id);
        Ok(())
    }

    async fn remove(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        if let Some(set) = self.sets.lock().await.get_mut(&kind) {
            set.remove(id);
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAnswerHistoryRepository {
    entries: Arc<Mutex<Vec<AnswerHistoryEntry>>>,
}

impl InMemoryAnswerHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the log with existing entries.
    pub fn with_entries(entries: Vec<AnswerHistoryEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}

#[async_trait]
impl AnswerHistoryRepository for InMemoryAnswerHistoryRepository {
    async fn append(&self, entry: AnswerHistoryEntry) -> Result<()> {
        self.entries.lock().await.push(entry);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AnswerHistoryEntry>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.lock().await.clear();
        Ok(())
    }
}
