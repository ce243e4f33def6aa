//! Insights Service
//!
//! Builds the dashboard report from recorded survey answers.

use anyhow::{Context, Result};
use moodtrip_core::insights::{
    AnswerHistoryRepository, InsightsReport, build_report, sorted_label_frequencies,
};
use std::sync::Arc;

pub struct InsightsService {
    history_repository: Arc<dyn AnswerHistoryRepository>,
    trend_category: String,
    trend_window: usize,
}

impl InsightsService {
    pub fn new(
        history_repository: Arc<dyn AnswerHistoryRepository>,
        trend_category: impl Into<String>,
        trend_window: usize,
    ) -> Self {
        Self {
            history_repository,
            trend_category: trend_category.into(),
            trend_window,
        }
    }

    /// Full report over the stored history. Empty history gives an empty report.
    pub async fn report(&self) -> Result<InsightsReport> {
        let history = self
            .history_repository
            .list_all()
            .await
            .context("Failed to load answer history")?;

        let report = build_report(&history, &self.trend_category, self.trend_window);
        tracing::debug!(
            total_answers = report.total_answers,
            categories = report.label_frequencies.len(),
            "Built insights report"
        );
        Ok(report)
    }

    /// Label counts for a single category, most frequent first.
    pub async fn label_frequencies(&self, category_key: &str) -> Result<Vec<(String, usize)>> {
        let history = self
            .history_repository
            .list_all()
            .await
            .context("Failed to load answer history")?;
        Ok(sorted_label_frequencies(&history, category_key))
    }

    pub async fn clear_history(&self) -> Result<()> {
        self.history_repository
            .clear()
            .await
            .context("Failed to clear answer history")?;
        tracing::info!("Answer history cleared");
        Ok(())
    }
}
