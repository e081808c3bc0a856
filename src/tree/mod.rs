//! Lookup tree of raw provider fields.
//!
//! Nested mappings are collapsed onto the key of their nearest enclosing
//! mapping, so every scalar sits at most one level deep. Deeper structure is
//! lost and colliding keys overwrite each other.

use serde::Serialize;
use serde_json::{Map, Value};
use std::ops::Index;

static MISSING: Value = Value::Null;

/// Flattened view of a provider response.
///
/// Reads never fail: an absent key yields `Value::Null`, and indexing a
/// `Null` yields `Null` again, so `tree["a"]["b"]` is always safe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tree {
    root: Map<String, Value>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_content(content: &Value) -> Self {
        let mut tree = Self::new();
        tree.build(content);
        tree
    }

    /// Merge one decoded payload into the tree.
    ///
    /// Anything other than a non-empty object leaves the tree untouched.
    pub fn build(&mut self, content: &Value) {
        self.build_under(content, None);
    }

    fn build_under(&mut self, content: &Value, last: Option<&str>) {
        let Value::Object(map) = content else {
            return;
        };
        for (key, value) in map {
            match (value, last) {
                (Value::Object(_), _) => self.build_under(value, Some(key.as_str())),
                (_, Some(parent)) => {
                    self.branch_mut(parent).insert(key.clone(), value.clone());
                }
                (_, None) => self.insert(key.clone(), value.clone()),
            }
        }
    }

    /// Get the mapping stored under `key`, creating it if absent. A scalar
    /// already stored there is replaced.
    pub fn branch_mut(&mut self, key: &str) -> &mut Map<String, Value> {
        let slot = self
            .root
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!("branch slot is always an object"),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.root.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> &Value {
        self.root.get(key).unwrap_or(&MISSING)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.root.contains_key(key)
    }

    /// String at `key`, if present and a string
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).as_str()
    }

    /// Number at `key`, accepting numeric strings as many providers send
    pub fn f64(&self, key: &str) -> Option<f64> {
        as_f64(self.get(key))
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.root.clone())
    }
}

impl Index<&str> for Tree {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

/// Read a number or numeric string
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        let tree = Tree::from_content(&json!({"a": 1, "b": 2}));
        assert_eq!(tree.to_json(), json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_one_level_nesting() {
        let tree = Tree::from_content(&json!({"a": {"b": 1}}));
        assert_eq!(tree["a"]["b"], json!(1));
    }

    #[test]
    fn test_deep_nesting_collapses_onto_nearest_key() {
        let content = json!({
            "geometry": {
                "location": {"lat": 45.4, "lng": -75.7},
                "location_type": "ROOFTOP",
                "viewport": {
                    "northeast": {"lat": 45.5, "lng": -75.6}
                }
            }
        });
        let tree = Tree::from_content(&content);

        assert_eq!(tree["geometry"]["location_type"], json!("ROOFTOP"));
        assert_eq!(tree["location"]["lat"], json!(45.4));
        assert_eq!(tree["northeast"]["lat"], json!(45.5));
        // viewport only held a mapping, so it never gets its own entry
        assert!(!tree.contains_key("viewport"));
    }

    #[test]
    fn test_collision_overwrites() {
        let content = json!({
            "first": {"inner": {"name": "one"}},
            "second": {"inner": {"name": "two"}}
        });
        let tree = Tree::from_content(&content);
        assert_eq!(tree["inner"]["name"], json!("two"));
    }

    #[test]
    fn test_branch_replaces_scalar() {
        let content = json!({"a": 1, "outer": {"a": {"b": 2}}});
        let tree = Tree::from_content(&content);
        assert_eq!(tree["a"]["b"], json!(2));
    }

    #[test]
    fn test_missing_keys_read_as_null() {
        let tree = Tree::from_content(&json!({"a": 1}));
        assert_eq!(tree["missing"], Value::Null);
        assert_eq!(tree["missing"]["deeper"], Value::Null);
        assert!(tree.str("missing").is_none());
    }

    #[test]
    fn test_non_object_content_is_ignored() {
        assert!(Tree::from_content(&Value::Null).is_empty());
        assert!(Tree::from_content(&json!([1, 2, 3])).is_empty());
        assert!(Tree::from_content(&json!("raw text")).is_empty());
        assert!(Tree::from_content(&json!({})).is_empty());
    }

    #[test]
    fn test_arrays_are_scalars() {
        let tree = Tree::from_content(&json!({"bbox": [1.0, 2.0, 3.0, 4.0]}));
        assert_eq!(tree["bbox"][2], json!(3.0));
    }

    #[test]
    fn test_numeric_string() {
        let tree = Tree::from_content(&json!({"lat": "45.4215", "lon": -75.69}));
        assert_eq!(tree.f64("lat"), Some(45.4215));
        assert_eq!(tree.f64("lon"), Some(-75.69));
        assert_eq!(tree.f64("missing"), None);
    }
}
