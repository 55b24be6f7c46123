use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::DayProgress;

/// localStorage key, shared with earlier builds of the app.
pub const PROGRESS_KEY: &str = "liftlog";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("localStorage is unavailable")]
    Unavailable,
    #[error("failed to serialize progress: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write progress: {0}")]
    Write(String),
}

/// Day index -> saved progress for that day.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProgressStore {
    days: BTreeMap<usize, DayProgress>,
}

impl ProgressStore {
    pub fn get(&self, day_index: usize) -> Option<&DayProgress> {
        self.days.get(&day_index)
    }

    pub(crate) fn insert(&mut self, day_index: usize, record: DayProgress) {
        self.days.insert(day_index, record);
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn is_complete(&self, day_index: usize) -> bool {
        self.get(day_index).is_some_and(|record| record.is_complete)
    }

    /// Day 0 is always open; any other day needs the previous one complete.
    pub fn is_unlocked(&self, day_index: usize) -> bool {
        match day_index {
            0 => true,
            n => self.is_complete(n - 1),
        }
    }

    pub fn completed_days(&self) -> impl Iterator<Item = usize> + '_ {
        self.days
            .iter()
            .filter(|(_, record)| record.is_complete)
            .map(|(day, _)| *day)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        // serde_json writes integer map keys as strings, matching `{"0": {...}}`.
        serde_json::to_string(&self.days)
    }

    /// Parse the stored text. Malformed JSON yields an empty store; entries
    /// whose key is not a day index or whose value is not an object are skipped.
    pub fn from_json(json: &str) -> Self {
        let raw: BTreeMap<String, Value> = match serde_json::from_str(json) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("discarding malformed progress data: {}", e);
                return Self::default();
            }
        };

        let days = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let day_index = key.trim().parse::<usize>().ok()?;
                if !value.is_object() {
                    return None;
                }
                let record = serde_json::from_value::<DayProgress>(value).ok()?;
                Some((day_index, record))
            })
            .collect();

        Self { days }
    }
}

/// Durable home of the progress store.
pub trait ProgressStorage {
    /// Never fails: anything unreadable comes back as an empty store.
    fn load(&self) -> ProgressStore;

    fn save(&self, store: &ProgressStore) -> Result<(), StorageError>;
}

/// Browser localStorage under a single key.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(PROGRESS_KEY)
    }
}

pub fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl ProgressStorage for LocalStorage {
    fn load(&self) -> ProgressStore {
        let storage = match get_local_storage() {
            Some(s) => s,
            None => {
                log::warn!("localStorage unavailable, starting with empty progress");
                return ProgressStore::default();
            }
        };

        match storage.get_item(&self.key) {
            Ok(Some(json)) => ProgressStore::from_json(&json),
            _ => ProgressStore::default(),
        }
    }

    fn save(&self, store: &ProgressStore) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        let json = store.to_json()?;
        storage
            .set_item(&self.key, &json)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// In-memory stand-in that keeps the serialized text, so loads go through the
/// same parser as localStorage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    text: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            writes: Cell::new(0),
        }
    }

    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self) -> ProgressStore {
        self.text
            .borrow()
            .as_deref()
            .map(ProgressStore::from_json)
            .unwrap_or_default()
    }

    fn save(&self, store: &ProgressStore) -> Result<(), StorageError> {
        let json = store.to_json()?;
        *self.text.borrow_mut() = Some(json);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::normalize_weights;
    use serde_json::json;

    fn record(weights: Value, is_complete: bool) -> DayProgress {
        DayProgress {
            weights: normalize_weights(&weights),
            is_complete,
        }
    }

    #[test]
    fn test_unlock_derivation() {
        let mut store = ProgressStore::default();
        assert!(store.is_unlocked(0));
        assert!(!store.is_unlocked(1));

        store.insert(0, record(json!({ "Bench": "10" }), false));
        assert!(!store.is_unlocked(1));

        store.insert(0, record(json!({ "Bench": "10" }), true));
        assert!(store.is_unlocked(1));
        assert!(!store.is_unlocked(2));
    }

    #[test]
    fn test_round_trip_through_memory_storage() {
        let storage = MemoryStorage::default();
        let mut store = ProgressStore::default();
        store.insert(0, record(json!({ "Bench": "10.0", "Row": "5" }), true));
        store.insert(3, record(json!({ "Squat": "100" }), false));

        storage.save(&store).unwrap();
        assert_eq!(storage.load(), store);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_stored_format_uses_string_keys() {
        let mut store = ProgressStore::default();
        store.insert(2, record(json!({ "Bench": "10" }), true));
        let value: Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "2": { "weights": { "Bench": "10" }, "isComplete": true } }));
    }

    #[test]
    fn test_corrupt_or_missing_loads_empty() {
        assert!(MemoryStorage::default().load().is_empty());
        assert!(MemoryStorage::with_text("{not json").load().is_empty());
        assert!(MemoryStorage::with_text("[1,2,3]").load().is_empty());
        assert!(MemoryStorage::with_text("null").load().is_empty());
    }

    #[test]
    fn test_bad_entries_are_skipped() {
        let storage = MemoryStorage::with_text(
            r#"{"0":{"weights":{"Bench":"10"},"isComplete":true},"x":{"isComplete":true},"1":5}"#,
        );
        let store = storage.load();
        assert_eq!(store.len(), 1);
        assert!(store.is_complete(0));
        assert_eq!(store.completed_days().collect::<Vec<_>>(), vec![0]);
    }
}
