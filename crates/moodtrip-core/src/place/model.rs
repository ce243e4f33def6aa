//! Place domain model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of a place within a catalog.
pub type PlaceId = i64;

/// A travel destination with its own per-category score profile.
///
/// The JSON shape follows the bundled catalog document: camelCase keys,
/// with `imageURL` accepted as an alias of `imageUrl`. Display fields that
/// older catalogs do not carry default to empty values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Unique, stable identifier.
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub detailed_description: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, alias = "imageURL")]
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Category key to intensity (0-100). Missing keys count as 0 when matching.
    #[serde(default)]
    pub scores: BTreeMap<String, i32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub recommended_duration: String,
    #[serde(default)]
    pub best_with: String,
}

impl Place {
    /// Creates a place with only the fields needed for matching.
    pub fn new(id: PlaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            detailed_description: String::new(),
            address: String::new(),
            image_url: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            scores: BTreeMap::new(),
            tags: Vec::new(),
            recommended_duration: String::new(),
            best_with: String::new(),
        }
    }

    /// Builder-style helper to set a category score.
    pub fn with_score(mut self, category: impl Into<String>, score: i32) -> Self {
        self.scores.insert(category.into(), score);
        self
    }

    /// Returns the score for a category, defaulting to 0 when absent.
    pub fn score_for(&self, category: &str) -> i32 {
        self.scores.get(category).copied().unwrap_or(0)
    }

    /// Mean of this place's own category scores (integer division).
    ///
    /// Returns 0 for a place without any scores.
    pub fn average_score(&self) -> i32 {
        if self.scores.is_empty() {
            return 0;
        }
        let total: i64 = self.scores.values().map(|&s| i64::from(s)).sum();
        // The mean of i32 values always fits back into i32.
        (total / self.scores.len() as i64) as i32
    }

    /// Returns `(latitude, longitude)`.
    pub fn coordinate(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_for_missing_category_is_zero() {
        let place = Place::new(1, "Jeju").with_score("calm", 70);
        assert_eq!(place.score_for("calm"), 70);
        assert_eq!(place.score_for("nature"), 0);
    }

    #[test]
    fn test_average_score() {
        let place = Place::new(1, "Busan")
            .with_score("calm", 60)
            .with_score("family", 90)
            .with_score("nature", 85);
        assert_eq!(place.average_score(), 78);
        assert_eq!(Place::new(2, "Empty").average_score(), 0);
    }

    #[test]
    fn test_average_score_with_extreme_values() {
        let high = Place::new(1, "Big")
            .with_score("calm", i32::MAX)
            .with_score("family", 10);
        assert_eq!(high.average_score(), 1_073_741_828);

        let low = Place::new(2, "Small")
            .with_score("calm", i32::MIN)
            .with_score("family", i32::MIN);
        assert_eq!(low.average_score(), i32::MIN);
    }

    #[test]
    fn test_deserialize_legacy_shape() {
        let json = r#"{
            "id": 7,
            "name": "Gyeongju",
            "description": "Old capital",
            "imageURL": "https://example.com/g.jpg",
            "latitude": 35.83,
            "longitude": 129.21,
            "scores": { "calm": 80, "family": 70 }
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.id, 7);
        assert_eq!(place.image_url, "https://example.com/g.jpg");
        assert_eq!(place.score_for("family"), 70);
        assert!(place.tags.is_empty());
        assert!(place.best_with.is_empty());
    }

    #[test]
    fn test_deserialize_full_shape() {
        let json = r#"{
            "id": 3,
            "name": "Seoraksan",
            "description": "Mountains",
            "detailedDescription": "Granite peaks and temples",
            "address": "Sokcho, Gangwon",
            "imageUrl": "https://example.com/s.jpg",
            "latitude": 38.11,
            "longitude": 128.46,
            "scores": { "nature": 95 },
            "tags": ["hiking", "autumn"],
            "recommendedDuration": "2 days",
            "bestWith": "Friends"
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.detailed_description, "Granite peaks and temples");
        assert_eq!(place.tags, vec!["hiking".to_string(), "autumn".to_string()]);
        assert_eq!(place.recommended_duration, "2 days");
        assert_eq!(place.coordinate(), (38.11, 128.46));
    }
}
