use serde_json::{Map, Value, json};

use crate::domain::GeocodeResult;

impl GeocodeResult {
    /// OpenStreetMap-style tags: `x`/`y` plus the `addr:*` keys that have a
    /// value. Empty without coordinates.
    pub fn osm(&self) -> Map<String, Value> {
        let mut tags = Map::new();
        let (Some(x), Some(y)) = (self.x(), self.y()) else {
            return tags;
        };
        tags.insert("x".to_string(), json!(x));
        tags.insert("y".to_string(), json!(y));

        let address = [
            ("addr:housenumber", self.housenumber()),
            ("addr:street", self.road()),
            ("addr:city", self.city()),
            ("addr:state", self.state()),
            ("addr:country", self.country()),
            ("addr:postal", self.postal()),
        ];
        for (key, value) in address {
            if let Some(value) = value {
                tags.insert(key.to_string(), json!(value));
            }
        }
        if let Some(population) = self.population() {
            tags.insert("population".to_string(), json!(population));
        }
        tags
    }
}
