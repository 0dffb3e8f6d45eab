pub mod loader;

pub use self::loader::{load_inputs_csv, load_inputs_from_file, load_inputs_json, save_inputs_json};
use crate::scorer::RawValue;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Raw measurements keyed by metric id. Ids absent from the catalog are kept
/// but never scored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawInputSet(HashMap<String, RawValue>);

// `null` means the field was left unanswered: drop it so it scores as missing.
impl<'de> Deserialize<'de> for RawInputSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, Option<RawValue>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(id, v)| v.map(|v| (id, v)))
                .collect(),
        ))
    }
}

impl RawInputSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, returning whatever was there before.
    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<RawValue>) -> Option<RawValue> {
        self.0.insert(id.into(), value.into())
    }

    pub fn get(&self, id: &str) -> Option<&RawValue> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Ids sorted alphabetically, for stable diagnostics.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.0.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl<K, V> FromIterator<(K, V)> for RawInputSet
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for RawInputSet
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_and_returns_previous() {
        let mut set = RawInputSet::new();
        assert!(set.insert("pushups", 20).is_none());
        assert_eq!(set.insert("pushups", 30), Some(RawValue::Number(20.0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn collects_mixed_values() {
        let set: RawInputSet = [("bmi", RawValue::from(22.0)), ("backbend", RawValue::from("cobra_touch_feet"))]
            .into_iter()
            .collect();
        assert_eq!(set.ids(), vec!["backbend", "bmi"]);
    }

    #[test]
    fn null_values_are_dropped() {
        let set: RawInputSet = serde_json::from_str(r#"{"pushups": 50, "pullups": null}"#).unwrap();
        assert_eq!(set.ids(), vec!["pushups"]);
        assert!(!set.contains("pullups"));
    }
}
