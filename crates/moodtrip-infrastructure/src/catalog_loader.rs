//! JSON place catalog loader.
//!
//! The catalog document is a JSON array of place records, loaded once at
//! startup.

use std::fs;
use std::path::Path;

use moodtrip_core::MoodTripError;
use moodtrip_core::error::Result;
use moodtrip_core::place::{CatalogLoad, Place, PlaceCatalog};

pub struct JsonCatalogLoader;

impl JsonCatalogLoader {
    /// Parses a catalog document.
    ///
    /// Malformed JSON is a `Serialization` error; duplicate ids are a
    /// `CatalogLoad` error.
    pub fn parse(content: &str) -> Result<PlaceCatalog> {
        let places: Vec<Place> = serde_json::from_str(content)?;
        PlaceCatalog::from_places(places)
    }

    /// Loads a catalog, failing on a missing or malformed file.
    ///
    /// Every failure is reported as `CatalogLoad`, with the underlying cause
    /// kept in the message.
    pub fn load(path: &Path) -> Result<PlaceCatalog> {
        let catalog = Self::read(path).map_err(|e| {
            if e.is_catalog_load() {
                e
            } else {
                MoodTripError::catalog_load(format!("{}: {}", path.display(), e))
            }
        })?;
        tracing::info!(path = %path.display(), places = catalog.len(), "Loaded place catalog");
        Ok(catalog)
    }

    fn read(path: &Path) -> Result<PlaceCatalog> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads a catalog, degrading to an empty one on failure.
    ///
    /// The failure reason is kept in [`CatalogLoad::fallback`] and logged.
    pub fn load_lenient(path: &Path) -> CatalogLoad {
        match Self::load(path) {
            Ok(catalog) => CatalogLoad::loaded(catalog),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using empty place catalog");
                CatalogLoad::fallback(e.to_string())
            }
        }
    }
}
