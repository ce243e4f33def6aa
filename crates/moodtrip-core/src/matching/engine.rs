//! Match scoring and ranking.
//!
//! Every function here is pure and deterministic. Scores are expected to lie
//! in 0..=100; values outside that range are not rejected, but each
//! per-category term saturates to 0..=100 so the percentage stays bounded.

use serde::Serialize;

use crate::matching::profile::UserScoreProfile;
use crate::place::{Place, PlaceId};

/// Points awarded for a single category with no difference.
const MAX_CATEGORY_POINTS: i64 = 100;

/// How well one place matches a profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub place: &'a Place,
    /// Sum of per-category closeness points.
    pub raw_score: i64,
    /// `raw_score` normalized to 0..=100.
    pub percentage: u8,
}

/// Sums `100 - |user - place|` over every category in the profile.
pub fn raw_score(profile: &UserScoreProfile, place: &Place) -> i64 {
    profile
        .iter()
        .map(|(category, user_score)| {
            let diff = (i64::from(user_score) - i64::from(place.score_for(category))).abs();
            (MAX_CATEGORY_POINTS - diff).clamp(0, MAX_CATEGORY_POINTS)
        })
        .sum()
}

/// Normalized match percentage in 0..=100.
///
/// An empty profile yields 0. Rounding is half away from zero.
pub fn compute_match_percentage(profile: &UserScoreProfile, place: &Place) -> u8 {
    normalize(raw_score(profile, place), profile.len())
}

fn normalize(raw: i64, categories: usize) -> u8 {
    if categories == 0 {
        return 0;
    }
    let max_possible = categories as f64 * MAX_CATEGORY_POINTS as f64;
    let percentage = (raw as f64 / max_possible * 100.0).round();
    percentage.clamp(0.0, 100.0) as u8
}

/// Scores a single place.
pub fn evaluate<'a>(profile: &UserScoreProfile, place: &'a Place) -> MatchResult<'a> {
    let raw = raw_score(profile, place);
    let percentage = normalize(raw, profile.len());
    tracing::debug!(place_id = place.id, raw, percentage, "Scored place");
    MatchResult {
        place,
        raw_score: raw,
        percentage,
    }
}

/// Ranks places by match percentage, best first.
///
/// The place with id `exclude_id` is skipped. Equal percentages keep catalog
/// order (stable sort). At most `limit` results are returned.
pub fn rank_places<'a>(
    profile: &UserScoreProfile,
    places: &'a [Place],
    exclude_id: Option<PlaceId>,
    limit: usize,
) -> Vec<MatchResult<'a>> {
    let mut results: Vec<MatchResult<'a>> = places
        .iter()
        .filter(|place| Some(place.id) != exclude_id)
        .map(|place| evaluate(profile, place))
        .collect();

    results.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    results.truncate(limit);
    results
}

/// The single best match, or `None` for an empty candidate list.
pub fn find_best_match<'a>(
    profile: &UserScoreProfile,
    places: &'a [Place],
) -> Option<MatchResult<'a>> {
    rank_places(profile, places, None, 1).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(pairs: &[(&str, i32)]) -> UserScoreProfile {
        UserScoreProfile::from_pairs(pairs.iter().map(|(k, v)| (*k, *v)))
    }

    fn catalog() -> Vec<Place> {
        vec![
            Place::new(1, "Jeju").with_score("calm", 90).with_score("family", 80),
            Place::new(2, "Busan").with_score("calm", 40).with_score("family", 70),
            Place::new(3, "Gyeongju").with_score("calm", 80).with_score("family", 90),
            Place::new(4, "Seoul").with_score("calm", 20).with_score("family", 50),
            Place::new(5, "Jeonju").with_score("calm", 70).with_score("family", 85),
        ]
    }

    #[test]
    fn test_documented_example() {
        let user = profile(&[("calm", 80), ("family", 90)]);
        let place = Place::new(1, "Lake")
            .with_score("calm", 60)
            .with_score("family", 90);

        assert_eq!(raw_score(&user, &place), 180);
        assert_eq!(compute_match_percentage(&user, &place), 90);
    }

    #[test]
    fn test_empty_profile_yields_zero() {
        let place = Place::new(1, "Anywhere").with_score("calm", 50);
        assert_eq!(compute_match_percentage(&UserScoreProfile::new(), &place), 0);
    }

    #[test]
    fn test_identical_scores_yield_hundred() {
        let user = profile(&[("calm", 35), ("nature", 72)]);
        let place = Place::new(1, "Twin")
            .with_score("calm", 35)
            .with_score("nature", 72)
            .with_score("family", 10);
        assert_eq!(compute_match_percentage(&user, &place), 100);
    }

    #[test]
    fn test_opposite_scores_yield_zero() {
        let user = profile(&[("calm", 100), ("nature", 0)]);
        let place = Place::new(1, "Opposite")
            .with_score("calm", 0)
            .with_score("nature", 100);
        assert_eq!(compute_match_percentage(&user, &place), 0);
    }

    #[test]
    fn test_missing_place_category_counts_as_zero() {
        let user = profile(&[("nightlife", 30)]);
        let place = Place::new(1, "Quiet").with_score("calm", 100);
        assert_eq!(compute_match_percentage(&user, &place), 70);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 101 / 200 = 50.5
        let user = profile(&[("calm", 50), ("family", 1)]);
        let place = Place::new(1, "Half")
            .with_score("calm", 50)
            .with_score("family", 100);
        assert_eq!(raw_score(&user, &place), 101);
        assert_eq!(compute_match_percentage(&user, &place), 51);
    }

    #[test]
    fn test_out_of_range_scores_stay_bounded() {
        let user = profile(&[("calm", 250), ("family", -40)]);
        let place = Place::new(1, "Odd").with_score("calm", 0).with_score("family", 100);
        let percentage = compute_match_percentage(&user, &place);
        assert!(percentage <= 100);
        assert_eq!(percentage, 0);
    }

    #[test]
    fn test_percentage_always_in_bounds() {
        let places = catalog();
        for calm in (0..=100).step_by(10) {
            for family in (0..=100).step_by(25) {
                let user = profile(&[("calm", calm), ("family", family), ("nature", 60)]);
                for place in &places {
                    assert!(compute_match_percentage(&user, place) <= 100);
                }
            }
        }
    }

    #[test]
    fn test_rank_excludes_and_limits() {
        let places = catalog();
        let user = profile(&[("calm", 80), ("family", 90)]);

        let ranked = rank_places(&user, &places, Some(3), 3);
        assert_eq!(ranked.len(), 3);
        assert!(ranked.iter().all(|r| r.place.id != 3));
        assert!(ranked.windows(2).all(|w| w[0].percentage >= w[1].percentage));
    }

    #[test]
    fn test_rank_returns_all_when_fewer_than_limit() {
        let places = catalog();
        let user = profile(&[("calm", 50)]);
        assert_eq!(rank_places(&user, &places, Some(1), 10).len(), 4);
        assert_eq!(rank_places(&user, &places, None, 10).len(), 5);
        assert_eq!(rank_places(&user, &places, Some(99), 10).len(), 5);
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let places = vec![
            Place::new(10, "First").with_score("calm", 60),
            Place::new(11, "Second").with_score("calm", 40),
            Place::new(12, "Third").with_score("calm", 60),
        ];
        let user = profile(&[("calm", 50)]);

        let ids: Vec<PlaceId> = rank_places(&user, &places, None, 3)
            .iter()
            .map(|r| r.place.id)
            .collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[test]
    fn test_find_best_match() {
        let places = catalog();
        let user = profile(&[("calm", 80), ("family", 90)]);

        let best = find_best_match(&user, &places).unwrap();
        assert_eq!(best.place.id, 3);
        assert_eq!(best.percentage, 100);

        assert!(find_best_match(&user, &[]).is_none());
    }
}
