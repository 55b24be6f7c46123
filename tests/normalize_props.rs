//! Property tests for weight normalization.

use proptest::prelude::*;
use serde_json::{Map, Value};

use liftlog::progress::normalize_weights;

fn arb_raw_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[ ]{0,2}-?[0-9]{0,4}(\\.[0-9]{0,3})?[ ]{0,2}".prop_map(Value::String),
        "\\PC{0,8}".prop_map(Value::String),
        Just(Value::String("NaN".into())),
        Just(Value::String("-Infinity".into())),
    ]
}

fn arb_raw_weights() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[A-Za-z ]{1,12}", arb_raw_value(), 0..8)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>()))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in arb_raw_weights()) {
        let once = normalize_weights(&raw);
        let twice = normalize_weights(&once.to_value());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_values_are_finite_and_non_negative(raw in arb_raw_weights()) {
        for (_, text) in normalize_weights(&raw).iter() {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(text, text.trim());
            let num: f64 = text.parse().unwrap();
            prop_assert!(num.is_finite());
            prop_assert!(num >= 0.0);
        }
    }

    #[test]
    fn negative_numbers_are_dropped(n in 1u32..100_000) {
        let raw = serde_json::json!({ "a": -(n as i64), "b": format!("-{}", n) });
        prop_assert!(normalize_weights(&raw).is_empty());
    }
}
