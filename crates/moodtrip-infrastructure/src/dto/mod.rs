//! Data Transfer Objects (DTOs) for persistence.
//!
//! These types define the on-disk shape of persisted state. They are kept
//! apart from the domain models so the file format can evolve on its own.

mod history;
mod preferences;

pub use history::AnswerHistoryDto;
pub use preferences::PreferencesDto;
