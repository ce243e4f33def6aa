//! Answer history repository trait.

use async_trait::async_trait;

use crate::error::Result;
use crate::insights::model::AnswerHistoryEntry;

/// Append-only log of recorded survey answers.
#[async_trait]
pub trait AnswerHistoryRepository: Send + Sync {
    /// Appends an entry at the end of the log.
    async fn append(&self, entry: AnswerHistoryEntry) -> Result<()>;

    /// Returns every entry, oldest first.
    async fn list_all(&self) -> Result<Vec<AnswerHistoryEntry>>;

    /// Removes every entry.
    async fn clear(&self) -> Result<()>;
}
