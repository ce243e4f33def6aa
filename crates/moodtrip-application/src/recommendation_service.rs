//! Recommendation Service
//!
//! Turns a finished survey into a best match plus further recommendations,
//! and records each answer in the history log.

use anyhow::{Context, Result};
use moodtrip_core::insights::{AnswerHistoryEntry, AnswerHistoryRepository};
use moodtrip_core::matching::{MatchResult, UserScoreProfile, find_best_match, rank_places};
use moodtrip_core::place::{PlaceCatalog, PlaceId};
use serde::Serialize;
use std::sync::Arc;

/// What the result screen shows after a survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyOutcome<'a> {
    pub best: Option<MatchResult<'a>>,
    /// Next-best places, excluding `best`.
    pub more: Vec<MatchResult<'a>>,
}

pub struct RecommendationService {
    catalog: Arc<PlaceCatalog>,
    history_repository: Arc<dyn AnswerHistoryRepository>,
    recommendation_limit: usize,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<PlaceCatalog>,
        history_repository: Arc<dyn AnswerHistoryRepository>,
        recommendation_limit: usize,
    ) -> Self {
        Self {
            catalog,
            history_repository,
            recommendation_limit,
        }
    }

    pub fn catalog(&self) -> &PlaceCatalog {
        &self.catalog
    }

    /// Persists one survey answer.
    pub async fn record_answer(&self, entry: AnswerHistoryEntry) -> Result<()> {
        self.history_repository
            .append(entry)
            .await
            .context("Failed to record survey answer")
    }

    /// Picks the best match for a profile and the places that follow it.
    ///
    /// An empty catalog yields no best match and no recommendations.
    pub fn complete_survey(&self, profile: &UserScoreProfile) -> SurveyOutcome<'_> {
        let places = self.catalog.places();
        let best = find_best_match(profile, places);
        let more = match &best {
            Some(best) => self.recommendations_for(profile, Some(best.place.id)),
            None => Vec::new(),
        };

        match &best {
            Some(result) => tracing::info!(
                place_id = result.place.id,
                percentage = result.percentage,
                recommendations = more.len(),
                "Survey matched"
            ),
            None => tracing::warn!(catalog_size = places.len(), "Survey produced no match"),
        }

        SurveyOutcome { best, more }
    }

    /// Ranked recommendations, skipping the place currently on screen.
    pub fn recommendations_for(
        &self,
        profile: &UserScoreProfile,
        current_place: Option<PlaceId>,
    ) -> Vec<MatchResult<'_>> {
        rank_places(
            profile,
            self.catalog.places(),
            current_place,
            self.recommendation_limit,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodtrip_core::place::Place;
    use moodtrip_core::survey::SurveySession;
    use moodtrip_infrastructure::InMemoryAnswerHistoryRepository;

    fn catalog() -> Arc<PlaceCatalog> {
        Arc::new(
            PlaceCatalog::from_places(vec![
                Place::new(1, "Jeju").with_score("calm", 90).with_score("family", 50),
                Place::new(2, "Busan").with_score("calm", 40).with_score("family", 90),
                Place::new(3, "Gyeongju").with_score("calm", 85).with_score("family", 90),
                Place::new(4, "Seoul").with_score("calm", 20).with_score("family", 60),
                Place::new(5, "Jeonju").with_score("calm", 70).with_score("family", 80),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_complete_survey_excludes_best_from_more() {
        let service = RecommendationService::new(
            catalog(),
            Arc::new(InMemoryAnswerHistoryRepository::new()),
            3,
        );
        let profile = UserScoreProfile::from_pairs([("calm", 90), ("family", 90)]);

        let outcome = service.complete_survey(&profile);
        let best = outcome.best.unwrap();
        assert_eq!(best.place.id, 3);
        assert_eq!(outcome.more.len(), 3);
        assert!(outcome.more.iter().all(|r| r.place.id != 3));
        assert!(outcome.more.iter().all(|r| r.percentage <= best.percentage));
    }

    #[test]
    fn test_empty_catalog_has_no_match() {
        let service = RecommendationService::new(
            Arc::new(PlaceCatalog::empty()),
            Arc::new(InMemoryAnswerHistoryRepository::new()),
            3,
        );
        let outcome = service.complete_survey(&UserScoreProfile::from_pairs([("calm", 50)]));
        assert!(outcome.best.is_none());
        assert!(outcome.more.is_empty());
    }

    #[tokio::test]
    async fn test_survey_answers_are_recorded() {
        let history = Arc::new(InMemoryAnswerHistoryRepository::new());
        let service = RecommendationService::new(catalog(), history.clone(), 3);

        let mut session = SurveySession::default();
        while !session.is_complete() {
            let entry = session.answer(1).unwrap();
            service.record_answer(entry).await.unwrap();
        }

        let recorded = history.list_all().await.unwrap();
        assert_eq!(recorded.len(), 3);
        assert_eq!(recorded[0].selected_label, "Okay");

        let outcome = service.complete_survey(session.profile());
        assert!(outcome.best.is_some());
    }
}
