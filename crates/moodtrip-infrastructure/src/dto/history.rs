//! Persisted form of the survey answer history.

use moodtrip_core::insights::AnswerHistoryEntry;
use serde::{Deserialize, Serialize};

/// `history.toml` document: one `[[answer]]` table per recorded answer,
/// oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerHistoryDto {
    #[serde(rename = "answer", default)]
    pub answers: Vec<AnswerHistoryEntry>,
}

impl AnswerHistoryDto {
    /// Appends an entry, then drops the oldest entries beyond `cap`.
    pub fn push(&mut self, entry: AnswerHistoryEntry, cap: Option<usize>) {
        self.answers.push(entry);
        if let Some(cap) = cap {
            let excess = self.answers.len().saturating_sub(cap);
            self.answers.drain(..excess);
        }
    }
}
