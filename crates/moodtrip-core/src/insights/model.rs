//! Answer history and insight models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded survey answer.
///
/// History is append-only: entries are never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerHistoryEntry {
    pub category_key: String,
    pub selected_label: String,
    pub score: i32,
    pub recorded_at: DateTime<Utc>,
}

impl AnswerHistoryEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(category_key: impl Into<String>, selected_label: impl Into<String>, score: i32) -> Self {
        Self::recorded_at(category_key, selected_label, score, Utc::now())
    }

    pub fn recorded_at(
        category_key: impl Into<String>,
        selected_label: impl Into<String>,
        score: i32,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            category_key: category_key.into(),
            selected_label: selected_label.into(),
            score,
            recorded_at,
        }
    }
}

/// Direction of a category's scores over the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Rising,
    Stable,
}

/// Average and direction of one category's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub average: f64,
    pub trend: Trend,
    pub samples: usize,
}

/// Everything the insights dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Per category, labels ordered by count descending.
    pub label_frequencies: BTreeMap<String, Vec<(String, usize)>>,
    /// Per category, the most frequently recorded score.
    pub most_frequent_scores: BTreeMap<String, i32>,
    pub trend_category: String,
    /// Most recent scores of `trend_category`, oldest first.
    pub recent_trend: Vec<i32>,
    pub mood: Option<MoodSummary>,
    pub total_answers: usize,
}

impl InsightsReport {
    pub fn is_empty(&self) -> bool {
        self.total_answers == 0
    }
}
