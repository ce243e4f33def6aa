//! Persisted form of the preference sets.

use moodtrip_core::place::PlaceId;
use moodtrip_core::preference::{PreferenceKind, PreferenceSet};
use serde::{Deserialize, Serialize};

/// `preferences.toml` document.
///
/// ```toml
/// bookmarkedPlaceIDs = [3, 1]
/// visitedPlaceIDs = [2]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesDto {
    #[serde(rename = "bookmarkedPlaceIDs", default)]
    pub bookmarked: Vec<PlaceId>,
    #[serde(rename = "visitedPlaceIDs", default)]
    pub visited: Vec<PlaceId>,
}

impl PreferencesDto {
    /// Domain view of one set; repeated ids in the file collapse to one.
    pub fn set(&self, kind: PreferenceKind) -> PreferenceSet {
        PreferenceSet::from_ids(self.ids(kind).iter().copied())
    }

    /// Applies `f` to one set and stores the result back.
    ///
    /// Returns whatever `f` returns.
    pub fn modify<R>(&mut self, kind: PreferenceKind, f: impl FnOnce(&mut PreferenceSet) -> R) -> R {
        let mut set = self.set(kind);
        let result = f(&mut set);
        *self.ids_mut(kind) = set.ids().to_vec();
        result
    }

    fn ids(&self, kind: PreferenceKind) -> &Vec<PlaceId> {
        match kind {
            PreferenceKind::Bookmarked => &self.bookmarked,
            PreferenceKind::Visited => &self.visited,
        }
    }

    fn ids_mut(&mut self, kind: PreferenceKind) -> &mut Vec<PlaceId> {
        match kind {
            PreferenceKind::Bookmarked => &mut self.bookmarked,
            PreferenceKind::Visited => &mut self.visited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_keys() {
        let dto = PreferencesDto {
            bookmarked: vec![3, 1],
            visited: vec![],
        };
        let toml_str = toml::to_string(&dto).unwrap();
        assert!(toml_str.contains("bookmarkedPlaceIDs = [3, 1]"));

        let parsed: PreferencesDto = toml::from_str("visitedPlaceIDs = [2, 2, 5]").unwrap();
        assert!(parsed.bookmarked.is_empty());
        assert_eq!(parsed.set(PreferenceKind::Visited).ids(), &[2, 5]);
    }

    #[test]
    fn test_modify_touches_only_one_set() {
        let mut dto = PreferencesDto {
            bookmarked: vec![1],
            visited: vec![1],
        };
        let inserted = dto.modify(PreferenceKind::Visited, |set| set.insert(4));
        assert!(inserted);
        assert_eq!(dto.visited, vec![1, 4]);
        assert_eq!(dto.bookmarked, vec![1]);
    }
}
