use crate::error::ServerError;
use core_types::BaseAttributes;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A race as this backend stores and serves it: numeric id, and the same
/// attribute block the admin reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRace {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub base_attributes: BaseAttributes,
}

/// Read-only, in-memory race table. Order is the order of the seed.
#[derive(Debug, Clone, Default)]
pub struct RaceStore {
    races: Vec<StoredRace>,
}

impl RaceStore {
    pub fn new(races: Vec<StoredRace>) -> Result<Self, ServerError> {
        let mut seen = HashSet::new();
        for race in &races {
            if !seen.insert(race.id) {
                return Err(ServerError::DuplicateId(race.id));
            }
        }
        Ok(Self { races })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path).map_err(|source| ServerError::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let races = serde_json::from_str(&text).map_err(|source| ServerError::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(races)
    }

    pub fn len(&self) -> usize {
        self.races.len()
    }

    pub fn is_empty(&self) -> bool {
        self.races.is_empty()
    }

    /// Records in `[start, end)`, clamped to the table. Missing bounds mean
    /// "from the beginning" and "to the end".
    pub fn window(&self, start: Option<usize>, end: Option<usize>) -> &[StoredRace] {
        let len = self.races.len();
        let start = start.unwrap_or(0).min(len);
        let end = end.unwrap_or(len).clamp(start, len);
        &self.races[start..end]
    }

    pub fn get(&self, id: u64) -> Option<&StoredRace> {
        self.races.iter().find(|race| race.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: u64, name: &str) -> StoredRace {
        StoredRace {
            id,
            name: name.to_string(),
            description: String::new(),
            base_attributes: BaseAttributes::default(),
        }
    }

    #[test]
    fn window_is_clamped() {
        let store = RaceStore::new(vec![stored(1, "Human"), stored(2, "Elf"), stored(3, "Dwarf")]).unwrap();

        assert_eq!(store.window(None, None).len(), 3);
        assert_eq!(store.window(Some(1), Some(2))[0].name, "Elf");
        assert_eq!(store.window(Some(2), Some(10)).len(), 1);
        assert!(store.window(Some(5), Some(10)).is_empty());
        assert!(store.window(Some(2), Some(1)).is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = RaceStore::new(vec![stored(1, "Human"), stored(1, "Elf")]);
        assert!(matches!(result, Err(ServerError::DuplicateId(1))));
    }
}
