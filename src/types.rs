use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    pub sets: String,
    pub reps: String,
}

impl Exercise {
    pub fn standard(name: &str, sets: u8, reps: &str) -> Self {
        Self {
            name: name.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DayDefinition {
    pub warmup: Vec<Exercise>,
    pub workout: Vec<Exercise>,
}

/// Exercise name -> normalized weight text.
///
/// Only ever built through `progress::normalize_weights`, so every value parses
/// to a finite number >= 0 and no value is empty.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct Weights(BTreeMap<String, String>);

impl Weights {
    pub(crate) fn from_normalized(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    pub fn get(&self, exercise: &str) -> Option<&str> {
        self.0.get(exercise).map(String::as_str)
    }

    pub fn contains(&self, exercise: &str) -> bool {
        self.0.contains_key(exercise)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON object form, the payload the day view sends with save/complete.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                .collect(),
        )
    }

    /// Raw-input form, used to seed the day view's editable fields.
    pub fn to_text_map(&self) -> BTreeMap<String, String> {
        self.0.clone()
    }
}

// Stored weights are re-normalized on the way in, so hand-edited or stale
// localStorage can't smuggle invalid values past the invariant.
impl<'de> Deserialize<'de> for Weights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::progress::normalize_weights(&raw))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DayProgress {
    #[serde(default)]
    pub weights: Weights,
    #[serde(rename = "isComplete", default, deserialize_with = "truthy")]
    pub is_complete: bool,
}

fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    use serde_json::Value;
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Push/Pull/Legs rotation by day index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayKind {
    Push,
    Pull,
    Legs,
}

impl DayKind {
    pub fn for_day(day_index: usize) -> Self {
        match day_index % 3 {
            0 => DayKind::Push,
            1 => DayKind::Pull,
            _ => DayKind::Legs,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayKind::Push => "Push",
            DayKind::Pull => "Pull",
            DayKind::Legs => "Legs",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DayKind::Push => "fa-solid fa-dumbbell",
            DayKind::Pull => "fa-solid fa-weight-hanging",
            DayKind::Legs => "fa-solid fa-bolt",
        }
    }
}

/// Everything a grid card needs to render.
#[derive(Clone, Debug, PartialEq)]
pub struct CardInfo {
    pub day_index: usize,
    pub is_locked: bool,
    pub is_complete: bool,
    pub kind: DayKind,
    pub day_num: String,
}

impl CardInfo {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn icon(&self) -> &'static str {
        if self.is_locked {
            "fa-solid fa-lock"
        } else {
            self.kind.icon()
        }
    }
}

pub fn day_num(day_index: usize) -> String {
    format!("{:02}", day_index + 1)
}

/// Payload of a Save intent. `is_complete: Some(true)` skips the completion check.
#[derive(Clone, Debug, Default)]
pub struct SaveRequest {
    pub weights: serde_json::Value,
    pub is_complete: Option<bool>,
}

impl SaveRequest {
    pub fn weights(weights: serde_json::Value) -> Self {
        Self { weights, is_complete: None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Saved { is_complete: bool },
    Rejected,
}
