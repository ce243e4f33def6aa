//! Immutable in-memory place catalog.

use std::collections::{HashMap, HashSet};

use crate::error::{MoodTripError, Result};
use crate::place::model::{Place, PlaceId};

/// The candidate pool for matching.
///
/// A catalog is built once from a static source and never mutated afterwards.
/// Ids are unique within a catalog.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    places: Vec<Place>,
    index: HashMap<PlaceId, usize>,
}

impl PlaceCatalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate ids.
    pub fn from_places(places: Vec<Place>) -> Result<Self> {
        let mut index = HashMap::with_capacity(places.len());
        for (position, place) in places.iter().enumerate() {
            if index.insert(place.id, position).is_some() {
                return Err(MoodTripError::catalog_load(format!(
                    "duplicate place id {}",
                    place.id
                )));
            }
        }
        Ok(Self { places, index })
    }

    /// All places in catalog order.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn get(&self, id: PlaceId) -> Option<&Place> {
        self.index.get(&id).map(|&position| &self.places[position])
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Resolves ids against the catalog, keeping the order of `ids`.
    ///
    /// Ids with no catalog entry are dropped silently; repeated ids resolve once.
    pub fn resolve<'a, I>(&'a self, ids: I) -> Vec<&'a Place>
    where
        I: IntoIterator<Item = PlaceId>,
    {
        let mut seen = HashSet::new();
        ids.into_iter()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.get(id))
            .collect()
    }
}

/// Result of a lenient catalog load.
///
/// `fallback` carries the reason when the loader degraded to an empty catalog,
/// so callers can tell "genuinely empty" from "failed to load".
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: PlaceCatalog,
    pub fallback: Option<String>,
}

impl CatalogLoad {
    pub fn loaded(catalog: PlaceCatalog) -> Self {
        Self {
            catalog,
            fallback: None,
        }
    }

    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            catalog: PlaceCatalog::empty(),
            fallback: Some(reason.into()),
        }
    }

    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlaceCatalog {
        PlaceCatalog::from_places(vec![
            Place::new(1, "Jeju"),
            Place::new(2, "Busan"),
            Place::new(3, "Gyeongju"),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2).map(|p| p.name.as_str()), Some("Busan"));
        assert!(catalog.get(9).is_none());
        assert!(catalog.contains(3));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = PlaceCatalog::from_places(vec![Place::new(1, "A"), Place::new(1, "B")]);
        let err = result.unwrap_err();
        assert!(err.is_catalog_load());
    }

    #[test]
    fn test_resolve_drops_unknown_ids() {
        let catalog = sample();
        let resolved = catalog.resolve(vec![3, 42, 1, 3]);
        let ids: Vec<PlaceId> = resolved.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_fallback_is_observable() {
        let load = CatalogLoad::fallback("file missing");
        assert!(load.used_fallback());
        assert!(load.catalog.is_empty());
        assert!(!CatalogLoad::loaded(sample()).used_fallback());
    }
}
