use serde_json::{Value, json};

use crate::tree::as_f64;

/// Bounding box of a result, in degrees.
///
/// All four bounds exist together; there is no partially set box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Build from optional bounds; `None` unless all four are supplied.
    pub fn from_bounds(
        south: Option<f64>,
        west: Option<f64>,
        north: Option<f64>,
        east: Option<f64>,
    ) -> Option<Self> {
        Some(Self::new(south?, west?, north?, east?))
    }

    /// Build from raw provider values (numbers or numeric strings)
    pub fn from_values(south: &Value, west: &Value, north: &Value, east: &Value) -> Option<Self> {
        Self::from_bounds(as_f64(south), as_f64(west), as_f64(north), as_f64(east))
    }

    pub fn northeast(&self) -> [f64; 2] {
        [self.north, self.east]
    }

    pub fn northwest(&self) -> [f64; 2] {
        [self.north, self.west]
    }

    pub fn southeast(&self) -> [f64; 2] {
        [self.south, self.east]
    }

    pub fn southwest(&self) -> [f64; 2] {
        [self.south, self.west]
    }

    /// `[west, south]`, GeoJSON order
    pub fn westsouth(&self) -> [f64; 2] {
        [self.west, self.south]
    }

    /// `[east, north]`, GeoJSON order
    pub fn eastnorth(&self) -> [f64; 2] {
        [self.east, self.north]
    }

    /// `[west, south, east, north]` as used by a GeoJSON `bbox` member
    pub fn geojson(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// Corner pair exported under the `bbox` field
    pub fn corners(&self) -> Value {
        json!({
            "northeast": self.northeast(),
            "southwest": self.southwest(),
        })
    }
}
