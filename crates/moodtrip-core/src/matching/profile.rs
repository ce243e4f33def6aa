//! User score profile collected from survey answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{MoodTripError, Result};

/// Per-category preference intensities (0-100) for one user.
///
/// Each category key appears at most once; recording the same key again
/// overwrites the earlier answer. The profile may cover only a subset of the
/// known categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserScoreProfile {
    scores: BTreeMap<String, i32>,
}

impl UserScoreProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, i32)>,
    {
        let mut profile = Self::new();
        for (key, score) in pairs {
            profile.record(key, score);
        }
        profile
    }

    /// Records an answer, replacing any earlier score for the same key.
    pub fn record(&mut self, category: impl Into<String>, score: i32) {
        self.scores.insert(category.into(), score);
    }

    pub fn get(&self, category: &str) -> Option<i32> {
        self.scores.get(category).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Parses a `category=score` answer such as `calm=80`.
pub fn parse_answer(input: &str) -> Result<(String, i32)> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| MoodTripError::config(format!("expected category=score, got '{}'", input)))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(MoodTripError::config(format!(
            "missing category in answer '{}'",
            input
        )));
    }

    let score = value
        .trim()
        .parse::<i32>()
        .map_err(|e| MoodTripError::config(format!("invalid score in '{}': {}", input, e)))?;

    Ok((key.to_string(), score))
}
