//! Application configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_recommendation_limit() -> usize {
    3
}

fn default_trend_window() -> usize {
    7
}

fn default_trend_category() -> String {
    "calm".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings read from `config.toml`. Every field has a default, so a missing
/// or partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MoodTripConfig {
    /// Catalog document. `None` uses `places.json` in the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// How many further recommendations accompany the best match.
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Number of recent answers shown in the trend chart.
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,

    #[serde(default = "default_trend_category")]
    pub trend_category: String,

    /// Cap on stored answer history. `None` keeps everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_history_entries: Option<usize>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for MoodTripConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            recommendation_limit: default_recommendation_limit(),
            trend_window: default_trend_window(),
            trend_category: default_trend_category(),
            max_history_entries: None,
            log_level: default_log_level(),
        }
    }
}
