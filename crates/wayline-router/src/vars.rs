//! Extracted variables and their values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A value extracted from one matched token.
///
/// The variant records which kind of matcher produced the value: integer
/// matchers extract [`Value::Int`], literal and text matchers extract
/// [`Value::Str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Token parsed as a 32-bit signed integer.
    Int(i32),
    /// Token captured verbatim.
    Str(String),
}

impl Value {
    /// The integer payload, if this is an integer value.
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    /// The string payload, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(value) => Some(value),
        }
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Variables extracted by a match, or supplied to URL generation.
///
/// Keys are token matcher names. Merging is last-write-wins: when two
/// matchers in one route share a name, the later matcher's value replaces
/// the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarMap {
    entries: HashMap<String, Value>,
}

impl VarMap {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no variables are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a variable by matcher name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Insert a variable, replacing any previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Fold another map into this one, last write winning.
    pub fn merge(&mut self, other: VarMap) {
        self.entries.extend(other.entries);
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VarMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_last_write_wins() {
        let mut first = VarMap::from_iter([("a", 1), ("b", 2)]);
        let second = VarMap::from_iter([("b", 20), ("c", 30)]);
        first.merge(second);

        assert_eq!(first.len(), 3);
        assert_eq!(first.get("a"), Some(&Value::Int(1)));
        assert_eq!(first.get("b"), Some(&Value::Int(20)));
        assert_eq!(first.get("c"), Some(&Value::Int(30)));
    }

    #[test]
    fn test_value_conversions() {
        assert_eq!(Value::from(5).as_int(), Some(5));
        assert_eq!(Value::from("abc").as_str(), Some("abc"));
        assert_eq!(Value::from(5).as_str(), None);
        assert_eq!(Value::from("abc").as_int(), None);
    }

    #[test]
    fn test_serializes_as_a_plain_object() {
        let vars = VarMap::from_iter([("id", 7)]);
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            serde_json::json!({"id": 7})
        );

        let mut vars = VarMap::new();
        vars.insert("slug", "intro");
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            serde_json::json!({"slug": "intro"})
        );
    }
}
