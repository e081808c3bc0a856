use serde_json::{Map, Value};
use std::fmt;

use super::BoundingBox;

/// Kind of lookup a provider performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Geocode,
    Reverse,
    Details,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Geocode => "Geocode",
            Method::Reverse => "Reverse",
            Method::Details => "Details",
        };
        f.write_str(name)
    }
}

/// Normalized fields a provider adapter extracts from one response entry.
///
/// Empty strings are treated the same as `None` everywhere downstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    pub address: Option<String>,
    pub housenumber: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal: Option<String>,

    pub accuracy: Option<String>,
    pub quality: Option<String>,
    /// Only some result kinds (places, cities) carry a population
    pub population: Option<u64>,

    pub bbox: Option<BoundingBox>,

    /// Provider-specific fields exported after the canonical ones
    pub extras: Map<String, Value>,
}

impl Attributes {
    pub fn with_latlng(mut self, lat: Option<f64>, lng: Option<f64>) -> Self {
        self.lat = lat;
        self.lng = lng;
        self
    }

    pub fn with_address(mut self, address: Option<&str>) -> Self {
        self.address = address.map(str::to_string);
        self
    }

    pub fn with_bbox(mut self, bbox: Option<BoundingBox>) -> Self {
        self.bbox = bbox;
        self
    }
}
