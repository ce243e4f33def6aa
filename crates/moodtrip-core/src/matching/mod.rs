//! Matching a user's survey profile against catalog places.

mod engine;
mod profile;

pub use engine::{
    MatchResult, compute_match_percentage, evaluate, find_best_match, rank_places, raw_score,
};
pub use profile::{UserScoreProfile, parse_answer};
