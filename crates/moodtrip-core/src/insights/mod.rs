//! Survey answer history and the statistics derived from it.
//!
//! The aggregation functions are pure; persistence goes through
//! [`AnswerHistoryRepository`].

pub mod aggregator;
mod model;
mod repository;

pub use aggregator::{
    aggregate_label_frequencies, build_report, mood_summary, most_frequent_score,
    most_frequent_scores, recent_trend, sorted_label_frequencies,
};
pub use model::{AnswerHistoryEntry, InsightsReport, MoodSummary, Trend};
pub use repository::AnswerHistoryRepository;
