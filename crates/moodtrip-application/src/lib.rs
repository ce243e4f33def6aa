//! Application layer for MoodTrip.
//!
//! Use cases that combine the domain logic in `moodtrip-core` with the
//! repositories and catalog provided by `moodtrip-infrastructure`.

pub mod insights_service;
pub mod recommendation_service;
pub mod saved_places_service;

pub use insights_service::InsightsService;
pub use recommendation_service::{RecommendationService, SurveyOutcome};
pub use saved_places_service::SavedPlacesService;
