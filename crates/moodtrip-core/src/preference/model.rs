//! Preference set domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::place::PlaceId;

/// The named preference sets a place can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceKind {
    Bookmarked,
    Visited,
}

impl PreferenceKind {
    pub const ALL: [PreferenceKind; 2] = [PreferenceKind::Bookmarked, PreferenceKind::Visited];

    /// Storage key of this set.
    pub fn storage_key(self) -> &'static str {
        match self {
            PreferenceKind::Bookmarked => "bookmarkedPlaceIDs",
            PreferenceKind::Visited => "visitedPlaceIDs",
        }
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceKind::Bookmarked => write!(f, "bookmarked"),
            PreferenceKind::Visited => write!(f, "visited"),
        }
    }
}

/// An insertion-ordered set of place ids.
///
/// Adding a present id or removing an absent one is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceSet {
    ids: Vec<PlaceId>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored ids, dropping repeats.
    pub fn from_ids<I: IntoIterator<Item = PlaceId>>(ids: I) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.insert(id);
        }
        set
    }

    /// Returns `true` if the id was not present before.
    pub fn insert(&mut self, id: PlaceId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: PlaceId) -> bool {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(position) => {
                self.ids.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, id: PlaceId) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[PlaceId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = PreferenceSet::new();
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert_eq!(set.ids(), &[4]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = PreferenceSet::from_ids([1, 2]);
        assert!(!set.remove(9));
        assert_eq!(set.ids(), &[1, 2]);
        assert!(set.remove(1));
        assert_eq!(set.ids(), &[2]);
    }

    #[test]
    fn test_from_ids_drops_repeats_keeping_first_position() {
        let set = PreferenceSet::from_ids([3, 1, 3, 2, 1]);
        assert_eq!(set.ids(), &[3, 1, 2]);
    }

    #[test]
    fn test_storage_keys_are_distinct() {
        assert_ne!(
            PreferenceKind::Bookmarked.storage_key(),
            PreferenceKind::Visited.storage_key()
        );
        assert_eq!(PreferenceKind::Visited.to_string(), "visited");
    }
}
