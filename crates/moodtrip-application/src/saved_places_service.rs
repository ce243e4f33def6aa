//! Saved Places Service
//!
//! Bookmark and visited lists, resolved against the place catalog.

use anyhow::{Context, Result};
use moodtrip_core::MoodTripError;
use moodtrip_core::place::{Place, PlaceCatalog, PlaceId};
use moodtrip_core::preference::{PreferenceKind, PreferenceRepository};
use std::sync::Arc;

pub struct SavedPlacesService {
    catalog: Arc<PlaceCatalog>,
    preference_repository: Arc<dyn PreferenceRepository>,
}

impl SavedPlacesService {
    pub fn new(
        catalog: Arc<PlaceCatalog>,
        preference_repository: Arc<dyn PreferenceRepository>,
    ) -> Self {
        Self {
            catalog,
            preference_repository,
        }
    }

    /// Marks a place. Unknown ids are rejected so the lists only ever grow
    /// with real catalog entries.
    pub async fn mark(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        if !self.catalog.contains(id) {
            return Err(MoodTripError::not_found("place", id.to_string()).into());
        }
        self.preference_repository
            .add(kind, id)
            .await
            .with_context(|| format!("Failed to mark place {} as {}", id, kind))
    }

    /// Unmarks a place. Ids outside the catalog are accepted so stale
    /// entries can still be cleaned up.
    pub async fn unmark(&self, kind: PreferenceKind, id: PlaceId) -> Result<()> {
        self.preference_repository
            .remove(kind, id)
            .await
            .with_context(|| format!("Failed to unmark place {} as {}", id, kind))
    }

    /// Flips membership and returns the new state.
    pub async fn toggle(&self, kind: PreferenceKind, id: PlaceId) -> Result<bool> {
        if self.is_marked(kind, id).await? {
            self.unmark(kind, id).await?;
            Ok(false)
        } else {
            self.mark(kind, id).await?;
            Ok(true)
        }
    }

    pub async fn is_marked(&self, kind: PreferenceKind, id: PlaceId) -> Result<bool> {
        self.preference_repository
            .contains(kind, id)
            .await
            .with_context(|| format!("Failed to read {} places", kind))
    }

    /// Marked places in the order they were marked.
    pub async fn list(&self, kind: PreferenceKind) -> Result<Vec<Place>> {
        self.preference_repository
            .list_marked_places(kind, &self.catalog)
            .await
            .with_context(|| format!("Failed to list {} places", kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodtrip_infrastructure::{InMemoryPreferenceRepository, TomlPreferenceRepository};
    use tempfile::TempDir;

    fn catalog() -> Arc<PlaceCatalog> {
        Arc::new(
            PlaceCatalog::from_places(vec![
                Place::new(1, "Jeju"),
                Place::new(2, "Busan"),
                Place::new(3, "Gyeongju"),
            ])
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_toggle() {
        let service = SavedPlacesService::new(catalog(), Arc::new(InMemoryPreferenceRepository::new()));

        assert!(service.toggle(PreferenceKind::Bookmarked, 2).await.unwrap());
        assert!(service.is_marked(PreferenceKind::Bookmarked, 2).await.unwrap());
        assert!(!service.toggle(PreferenceKind::Bookmarked, 2).await.unwrap());
        assert!(!service.is_marked(PreferenceKind::Bookmarked, 2).await.unwrap());
    }

    #[tokio::test]
    async fn test_mark_unknown_place_is_rejected() {
        let service = SavedPlacesService::new(catalog(), Arc::new(InMemoryPreferenceRepository::new()));
        let err = service.mark(PreferenceKind::Visited, 99).await.unwrap_err();
        let domain = err.downcast_ref::<MoodTripError>().unwrap();
        assert!(domain.is_not_found());
    }

    #[tokio::test]
    async fn test_list_keeps_marking_order_and_skips_stale_ids() {
        let repo = Arc::new(InMemoryPreferenceRepository::new());
        repo.add(PreferenceKind::Visited, 3).await.unwrap();
        repo.add(PreferenceKind::Visited, 77).await.unwrap();
        repo.add(PreferenceKind::Visited, 1).await.unwrap();

        let service = SavedPlacesService::new(catalog(), repo);
        let ids: Vec<PlaceId> = service
            .list(PreferenceKind::Visited)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(service.list(PreferenceKind::Bookmarked).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("preferences.toml");
        std::fs::write(&path, "visitedPlaceIDs = \"oops\"").unwrap();

        let service = SavedPlacesService::new(catalog(), Arc::new(TomlPreferenceRepository::with_path(path)));
        let err = service.list(PreferenceKind::Visited).await.unwrap_err();
        let domain = err.downcast_ref::<MoodTripError>().unwrap();
        assert!(domain.is_storage());
    }
}
