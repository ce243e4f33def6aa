//! Domain layer for MoodTrip: places, matching, preference sets, survey
//! answers and insights. This crate performs no I/O; persistence is
//! expressed as repository traits implemented in `moodtrip-infrastructure`.

pub mod config;
pub mod error;
pub mod insights;
pub mod matching;
pub mod place;
pub mod preference;
pub mod survey;

// Re-export common error type
pub use error::MoodTripError;
