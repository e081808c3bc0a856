//! Minimal provider used by unit tests across the crate.

use serde_json::{Value, json};

use super::{Attributes, BoundingBox, Provider};
use crate::api::Request;
use crate::tree::Tree;

#[derive(Debug, Default)]
pub struct FakeProvider;

impl Provider for FakeProvider {
    fn name(&self) -> &str {
        "fake_maps"
    }

    fn request(&self) -> Request {
        Request::new("https://example.com/search").param("q", "453 Booth Street, Ottawa")
    }

    fn results(&self, content: &Value) -> anyhow::Result<Vec<Value>> {
        if let Some(status) = content["status"].as_str().filter(|s| *s != "OK") {
            anyhow::bail!("provider reported {status}");
        }
        content["results"]
            .as_array()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing results array"))
    }

    fn catch_errors(&self, tree: &Tree) -> Option<String> {
        tree.str("status")
            .filter(|s| *s != "OK")
            .map(|s| format!("ERROR - {s}"))
    }

    fn extract(&self, _entry: &Value, tree: &Tree) -> Attributes {
        let components = &tree["components"];
        let text = |key: &str| components[key].as_str().map(str::to_string);
        let bounds = &tree["bounds"];

        Attributes {
            lat: tree.f64("lat"),
            lng: tree.f64("lng"),
            address: tree.str("formatted").map(str::to_string),
            housenumber: text("house_number"),
            street: text("road"),
            city: text("city"),
            state: text("state"),
            country: text("country"),
            postal: text("postcode"),
            population: tree["population"].as_u64(),
            bbox: BoundingBox::from_values(
                &bounds["south"],
                &bounds["west"],
                &bounds["north"],
                &bounds["east"],
            ),
            ..Attributes::default()
        }
    }
}

/// A complete single-result response
pub fn ok_body() -> String {
    json!({
        "status": "OK",
        "results": [{
            "formatted": "453 Booth Street, Ottawa, ON",
            "lat": 45.4215,
            "lng": -75.6972,
            "components": {
                "house_number": "453",
                "road": "Booth Street",
                "city": "Ottawa",
                "state": "Ontario",
                "country": "Canada",
                "postcode": "K1R 7K9"
            },
            "bounds": {"south": 45.0, "west": -76.0, "north": 45.5, "east": -75.5}
        }]
    })
    .to_string()
}
