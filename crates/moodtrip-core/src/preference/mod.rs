//! Bookmarked and visited place sets.

mod model;
mod repository;

pub use model::{PreferenceKind, PreferenceSet};
pub use repository::PreferenceRepository;
