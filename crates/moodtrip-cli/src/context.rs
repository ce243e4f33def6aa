//! Wiring of configuration, catalog and repositories for one CLI run.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use moodtrip_application::{InsightsService, RecommendationService, SavedPlacesService};
use moodtrip_core::config::MoodTripConfig;
use moodtrip_core::place::PlaceCatalog;
use moodtrip_infrastructure::{
    ConfigService, JsonCatalogLoader, MoodTripPaths, TomlAnswerHistoryRepository,
    TomlPreferenceRepository,
};

pub struct AppContext {
    pub config: MoodTripConfig,
    pub paths: MoodTripPaths,
    pub catalog: Arc<PlaceCatalog>,
    pub catalog_path: PathBuf,
    /// Why the catalog fell back to empty, if it did.
    pub catalog_fallback: Option<String>,
}

impl AppContext {
    /// Reads the config and catalog. A broken catalog degrades to an empty one.
    pub fn load(data_dir: Option<PathBuf>, catalog_override: Option<PathBuf>) -> Result<Self> {
        let paths = MoodTripPaths::new(data_dir);
        let config_service =
            ConfigService::new(paths.clone()).context("Failed to resolve config location")?;
        let config = config_service
            .get_config()
            .context("Failed to load configuration")?;

        let catalog_path = match catalog_override {
            Some(path) => path,
            None => config_service
                .catalog_path()
                .context("Failed to resolve catalog location")?,
        };
        let load = JsonCatalogLoader::load_lenient(&catalog_path);

        Ok(Self {
            config,
            paths,
            catalog: Arc::new(load.catalog),
            catalog_path,
            catalog_fallback: load.fallback,
        })
    }

    /// Emits the startup events. Called once the subscriber is installed.
    pub fn log_startup(&self) {
        tracing::debug!(
            "[Bootstrap] moodtrip v{} starting",
            env!("CARGO_PKG_VERSION")
        );
        match &self.catalog_fallback {
            Some(reason) => tracing::warn!(
                path = %self.catalog_path.display(),
                reason = %reason,
                "[Bootstrap] Catalog unavailable, continuing with no places"
            ),
            None => tracing::debug!(
                path = %self.catalog_path.display(),
                places = self.catalog.len(),
                "[Bootstrap] Catalog loaded"
            ),
        }
    }

    pub fn recommendation_service(&self, limit: Option<usize>) -> Result<RecommendationService> {
        let history = TomlAnswerHistoryRepository::new(&self.paths, self.config.max_history_entries)
            .context("Failed to open answer history")?;
        Ok(RecommendationService::new(
            self.catalog.clone(),
            Arc::new(history),
            limit.unwrap_or(self.config.recommendation_limit),
        ))
    }

    pub fn saved_places_service(&self) -> Result<SavedPlacesService> {
        let preferences =
            TomlPreferenceRepository::new(&self.paths).context("Failed to open preferences")?;
        Ok(SavedPlacesService::new(
            self.catalog.clone(),
            Arc::new(preferences),
        ))
    }

    pub fn insights_service(&self, category: Option<String>) -> Result<InsightsService> {
        let history = TomlAnswerHistoryRepository::new(&self.paths, self.config.max_history_entries)
            .context("Failed to open answer history")?;
        Ok(InsightsService::new(
            Arc::new(history),
            category.unwrap_or_else(|| self.config.trend_category.clone()),
            self.config.trend_window,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_catalog_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let context = AppContext::load(Some(temp_dir.path().to_path_buf()), None).unwrap();

        assert!(context.catalog.is_empty());
        assert!(context.catalog_fallback.is_some());
        assert_eq!(context.catalog_path, temp_dir.path().join("places.json"));
        assert_eq!(context.config, MoodTripConfig::default());
    }

    #[test]
    fn test_catalog_override_wins() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("custom.json");
        std::fs::write(
            &catalog,
            r#"[{"id": 7, "name": "Jeonju", "latitude": 35.8, "longitude": 127.1, "scores": {"calm": 70}}]"#,
        )
        .unwrap();

        let context =
            AppContext::load(Some(temp_dir.path().to_path_buf()), Some(catalog.clone())).unwrap();
        assert_eq!(context.catalog.len(), 1);
        assert!(context.catalog_fallback.is_none());
        assert_eq!(context.catalog_path, catalog);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "recommendation_limit = \"many\"").unwrap();
        assert!(AppContext::load(Some(temp_dir.path().to_path_buf()), None).is_err());
    }
}
