//! Completion and unlock rules.
//!
//! Everything here is synchronous and browser-free: the tracker talks to
//! durable storage only through [`ProgressStorage`], so the whole state
//! machine runs under plain `cargo test`.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::program::Catalog;
use crate::storage::{ProgressStorage, ProgressStore};
use crate::types::{day_num, CardInfo, DayKind, DayProgress, Outcome, SaveRequest, Weights};

/// Clean raw weight input into [`Weights`].
///
/// Anything that is not an object counts as empty. Values are coerced to text
/// and trimmed; empty, unparsable, non-finite and negative values are dropped.
/// Kept values keep the user's spelling ("10.0" stays "10.0").
pub fn normalize_weights(raw: &Value) -> Weights {
    let Some(input) = raw.as_object() else {
        return Weights::default();
    };

    let cleaned = input
        .iter()
        .filter_map(|(exercise, value)| {
            let text = coerce_text(value)?;
            accept_weight(&text).map(|w| (exercise.clone(), w.to_string()))
        })
        .collect();

    Weights::from_normalized(cleaned)
}

/// Same rule as [`normalize_weights`] for the text the input fields hold.
pub fn normalize_text_weights(raw: &BTreeMap<String, String>) -> Weights {
    let cleaned = raw
        .iter()
        .filter_map(|(exercise, text)| accept_weight(text).map(|w| (exercise.clone(), w.to_string())))
        .collect();
    Weights::from_normalized(cleaned)
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn accept_weight(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let num: f64 = trimmed.parse().ok()?;
    if !num.is_finite() || num < 0.0 {
        return None;
    }
    Some(trimmed)
}

/// True iff the day exists, has at least one workout exercise, and every one
/// of them has a weight.
pub fn can_complete(catalog: &Catalog, day_index: usize, weights: &Weights) -> bool {
    let Some(day) = catalog.day(day_index) else {
        return false;
    };
    if day.workout.is_empty() {
        return false;
    }
    day.workout
        .iter()
        .all(|exercise| weights.get(&exercise.name).is_some_and(|w| !w.trim().is_empty()))
}

/// Owns the progress store and the storage it persists to.
pub struct ProgressTracker<S> {
    catalog: Catalog,
    store: ProgressStore,
    storage: S,
}

impl<S: ProgressStorage> ProgressTracker<S> {
    /// Load the store once from `storage`.
    pub fn open(catalog: Catalog, storage: S) -> Self {
        let store = storage.load();
        log::debug!("loaded progress for {} day(s)", store.len());
        Self { catalog, store, storage }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn is_unlocked(&self, day_index: usize) -> bool {
        self.store.is_unlocked(day_index)
    }

    pub fn can_complete(&self, day_index: usize, weights: &Weights) -> bool {
        can_complete(&self.catalog, day_index, weights)
    }

    pub fn saved_weights(&self, day_index: usize) -> Weights {
        self.store
            .get(day_index)
            .map(|record| record.weights.clone())
            .unwrap_or_default()
    }

    /// Replace the record for `day_index` and persist.
    ///
    /// A day only becomes complete through an explicit `is_complete: Some(true)`;
    /// a plain save of an already-complete day re-checks coverage and may
    /// downgrade it.
    pub fn save(&mut self, day_index: usize, request: SaveRequest) -> Outcome {
        let weights = normalize_weights(&request.weights);
        let was_complete = self.store.is_complete(day_index);

        let is_complete = if request.is_complete == Some(true) {
            true
        } else if was_complete {
            can_complete(&self.catalog, day_index, &weights)
        } else {
            false
        };

        if was_complete && !is_complete {
            log::info!("day {} downgraded to incomplete", day_num(day_index));
        }
        log::debug!(
            "save day {}: {} weight(s), complete={}",
            day_num(day_index),
            weights.len(),
            is_complete
        );

        self.store.insert(day_index, DayProgress { weights, is_complete });
        self.persist();
        Outcome::Saved { is_complete }
    }

    /// Mark `day_index` complete if every workout exercise has a weight.
    /// Otherwise nothing changes.
    pub fn complete(&mut self, day_index: usize, raw_weights: &Value) -> Outcome {
        let weights = normalize_weights(raw_weights);
        if !can_complete(&self.catalog, day_index, &weights) {
            log::info!("complete rejected for day {}: missing weights", day_num(day_index));
            return Outcome::Rejected;
        }
        self.save(
            day_index,
            SaveRequest {
                weights: weights.to_value(),
                is_complete: Some(true),
            },
        )
    }

    pub fn cards(&self) -> Vec<CardInfo> {
        (0..self.catalog.len())
            .map(|day_index| CardInfo {
                day_index,
                is_locked: !self.is_unlocked(day_index),
                is_complete: self.store.is_complete(day_index),
                kind: DayKind::for_day(day_index),
                day_num: day_num(day_index),
            })
            .collect()
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.store) {
            log::warn!("failed to persist progress: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::{DayDefinition, Exercise};
    use serde_json::json;

    fn bench_row_catalog() -> Catalog {
        let day = DayDefinition {
            warmup: vec![Exercise::standard("Jumping Jacks", 1, "30")],
            workout: vec![
                Exercise::standard("Bench", 3, "10"),
                Exercise::standard("Row", 3, "10"),
            ],
        };
        Catalog::new(vec![day.clone(), day.clone(), day], BTreeMap::new())
    }

    #[test]
    fn test_normalize_drops_garbage() {
        let w = normalize_weights(&json!({
            "a": -1,
            "b": "abc",
            "c": null,
            "d": "",
            "e": "NaN",
            "f": "Infinity",
            "g": "  ",
            "h": true,
            "i": [5],
            "ok": " 42.5 ",
        }));
        assert_eq!(w.len(), 1);
        assert_eq!(w.get("ok"), Some("42.5"));
    }

    #[test]
    fn test_normalize_preserves_text() {
        let w = normalize_weights(&json!({ "Bench": "10.0", "Row": 7, "Curl": "0" }));
        assert_eq!(w.get("Bench"), Some("10.0"));
        assert_eq!(w.get("Row"), Some("7"));
        assert_eq!(w.get("Curl"), Some("0"));
    }

    #[test]
    fn test_normalize_non_object_is_empty() {
        assert!(normalize_weights(&Value::Null).is_empty());
        assert!(normalize_weights(&json!("10")).is_empty());
        assert!(normalize_weights(&json!([1, 2])).is_empty());
    }

    #[test]
    fn test_normalize_text_matches_json_form() {
        let mut raw = BTreeMap::new();
        raw.insert("Bench".to_string(), " 10 ".to_string());
        raw.insert("Row".to_string(), "-3".to_string());
        let w = normalize_text_weights(&raw);
        assert_eq!(w, normalize_weights(&json!({ "Bench": " 10 ", "Row": "-3" })));
    }

    #[test]
    fn test_can_complete_requires_full_coverage() {
        let catalog = bench_row_catalog();
        assert!(!can_complete(&catalog, 0, &normalize_weights(&json!({ "Bench": "10" }))));
        assert!(can_complete(&catalog, 0, &normalize_weights(&json!({ "Bench": "10", "Row": "0" }))));
        assert!(!can_complete(&catalog, 99, &normalize_weights(&json!({ "Bench": "10", "Row": "5" }))));
    }

    #[test]
    fn test_can_complete_empty_workout_never() {
        let catalog = Catalog::new(vec![DayDefinition::default()], BTreeMap::new());
        assert!(!can_complete(&catalog, 0, &Weights::default()));
        assert!(!can_complete(&catalog, 0, &normalize_weights(&json!({ "Bench": "1" }))));
    }

    #[test]
    fn test_plain_save_never_completes() {
        let mut tracker = ProgressTracker::open(bench_row_catalog(), MemoryStorage::default());
        let outcome = tracker.save(0, SaveRequest::weights(json!({ "Bench": "10", "Row": "5" })));
        assert_eq!(outcome, Outcome::Saved { is_complete: false });
        assert!(!tracker.is_unlocked(1));
    }

    #[test]
    fn test_save_bypass_and_complete_gate() {
        let mut tracker = ProgressTracker::open(bench_row_catalog(), MemoryStorage::default());
        let partial = json!({ "Bench": "10" });

        assert_eq!(tracker.complete(0, &partial), Outcome::Rejected);
        assert!(tracker.store().get(0).is_none());

        let outcome = tracker.save(0, SaveRequest { weights: partial, is_complete: Some(true) });
        assert_eq!(outcome, Outcome::Saved { is_complete: true });
        assert!(tracker.is_unlocked(1));
    }

    #[test]
    fn test_rejected_complete_leaves_prior_state() {
        let mut tracker = ProgressTracker::open(bench_row_catalog(), MemoryStorage::default());
        tracker.save(0, SaveRequest::weights(json!({ "Bench": "12" })));
        let before = tracker.store().clone();
        let writes = tracker.storage().writes();

        assert_eq!(tracker.complete(0, &json!({ "Row": "5" })), Outcome::Rejected);
        assert_eq!(tracker.store(), &before);
        assert_eq!(tracker.storage().writes(), writes);
    }

    #[test]
    fn test_cards_follow_unlock_chain() {
        let mut tracker = ProgressTracker::open(bench_row_catalog(), MemoryStorage::default());
        tracker.complete(0, &json!({ "Bench": "10", "Row": "5" }));

        let cards = tracker.cards();
        assert_eq!(cards.len(), 3);
        assert!(!cards[0].is_locked);
        assert!(cards[0].is_complete);
        assert!(!cards[1].is_locked);
        assert!(cards[2].is_locked);
        assert_eq!(cards[2].day_num, "03");
    }

    #[test]
    fn test_saved_weights_default_empty() {
        let tracker = ProgressTracker::open(bench_row_catalog(), MemoryStorage::default());
        assert!(tracker.saved_weights(0).is_empty());
    }
}
