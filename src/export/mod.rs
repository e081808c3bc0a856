//! Serializable views of a result.
//!
//! The `json` export walks a declared registry of field accessors rather
//! than inspecting the result, keeping only truthy values plus `ok`.

pub mod osm;
pub mod views;

use serde_json::{Map, Value, json};

use crate::domain::GeocodeResult;

type Accessor = fn(&GeocodeResult) -> Value;

/// Exported fields, in export order
pub const FIELDS: &[(&str, Accessor)] = &[
    ("accuracy", |r: &GeocodeResult| json!(r.accuracy())),
    ("address", |r: &GeocodeResult| json!(r.address())),
    ("bbox", |r: &GeocodeResult| r.bbox().map(|b| b.corners()).unwrap_or(Value::Null)),
    ("city", |r: &GeocodeResult| json!(r.city())),
    ("confidence", |r: &GeocodeResult| json!(r.confidence())),
    ("country", |r: &GeocodeResult| json!(r.country())),
    ("east", |r: &GeocodeResult| json!(r.bbox().map(|b| b.east))),
    ("eastnorth", |r: &GeocodeResult| json!(r.eastnorth())),
    ("housenumber", |r: &GeocodeResult| json!(r.housenumber())),
    ("lat", |r: &GeocodeResult| json!(r.lat())),
    ("lng", |r: &GeocodeResult| json!(r.lng())),
    ("north", |r: &GeocodeResult| json!(r.bbox().map(|b| b.north))),
    ("ok", |r: &GeocodeResult| json!(r.ok())),
    ("population", |r: &GeocodeResult| json!(r.population())),
    ("postal", |r: &GeocodeResult| json!(r.postal())),
    ("provider", |r: &GeocodeResult| json!(r.provider())),
    ("quality", |r: &GeocodeResult| json!(r.quality())),
    ("south", |r: &GeocodeResult| json!(r.bbox().map(|b| b.south))),
    ("state", |r: &GeocodeResult| json!(r.state())),
    ("status", |r: &GeocodeResult| json!(r.status())),
    ("status_code", |r: &GeocodeResult| r.status_code().to_json()),
    ("street", |r: &GeocodeResult| json!(r.street())),
    ("west", |r: &GeocodeResult| json!(r.bbox().map(|b| b.west))),
    ("westsouth", |r: &GeocodeResult| json!(r.westsouth())),
];

/// Null, false, 0, "" and empty collections are falsy; everything else is
/// truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

impl GeocodeResult {
    /// Names the export considers: the registry followed by provider extras
    pub fn fieldnames(&self) -> Vec<String> {
        FIELDS
            .iter()
            .map(|(name, _)| name.to_string())
            .chain(
                self.attributes()
                    .extras
                    .keys()
                    .filter(|key| !FIELDS.iter().any(|(name, _)| *name == key.as_str()))
                    .cloned(),
            )
            .collect()
    }

    /// Canonical export map: every truthy field, and always `ok`.
    pub fn json(&self) -> Map<String, Value> {
        let mut export = Map::new();
        for (name, accessor) in FIELDS {
            let value = accessor(self);
            if is_truthy(&value) {
                export.insert(name.to_string(), value);
            }
        }
        for (key, value) in &self.attributes().extras {
            if is_truthy(value) && !export.contains_key(key) {
                export.insert(key.clone(), value.clone());
            }
        }
        export.insert("ok".to_string(), Value::Bool(self.ok()));
        export
    }
}
