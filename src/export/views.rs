use serde_json::{Map, Value, json};

use crate::domain::GeocodeResult;

impl GeocodeResult {
    /// GeoJSON Point geometry, or `{}` without coordinates
    pub fn geometry(&self) -> Value {
        match (self.x(), self.y()) {
            (Some(x), Some(y)) => json!({"type": "Point", "coordinates": [x, y]}),
            _ => Value::Object(Map::new()),
        }
    }

    /// GeoJSON Feature wrapping the `json` export
    pub fn geojson(&self) -> Value {
        let mut properties = self.json();
        let bbox = self.bbox().map(|bbox| json!(bbox.geojson()));
        if let Some(bbox) = &bbox {
            properties.insert("bbox".to_string(), bbox.clone());
        }

        let mut feature = Map::new();
        feature.insert("type".to_string(), json!("Feature"));
        feature.insert("properties".to_string(), Value::Object(properties));
        if let Some(bbox) = bbox {
            feature.insert("bbox".to_string(), bbox);
        }
        let geometry = self.geometry();
        if geometry.as_object().is_some_and(|g| !g.is_empty()) {
            feature.insert("geometry".to_string(), geometry);
        }
        Value::Object(feature)
    }

    /// Well-Known Text point, or `""` without coordinates
    pub fn wkt(&self) -> String {
        match (self.x(), self.y()) {
            (Some(x), Some(y)) => format!("POINT({} {})", x, y),
            _ => String::new(),
        }
    }

    /// `[lng, lat]`, empty without coordinates
    pub fn xy(&self) -> Vec<f64> {
        match (self.lng(), self.lat()) {
            (Some(lng), Some(lat)) => vec![lng, lat],
            _ => Vec::new(),
        }
    }

    /// `[lat, lng]`, empty without coordinates
    pub fn latlng(&self) -> Vec<f64> {
        match (self.lat(), self.lng()) {
            (Some(lat), Some(lng)) => vec![lat, lng],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::RawResponse;
    use crate::domain::testing::{FakeProvider, ok_body};
    use crate::domain::{GeocodeResult, Provider};
    use serde_json::json;

    fn load(body: &str) -> GeocodeResult {
        let provider = FakeProvider;
        let raw = RawResponse::new(200, "https://example.com/search", body);
        GeocodeResult::from_outcome(&provider, &provider.request(), Ok(raw))
    }

    #[test]
    fn test_views_with_coordinates() {
        let result = load(&ok_body());
        assert_eq!(
            result.geometry(),
            json!({"type": "Point", "coordinates": [-75.6972, 45.4215]})
        );
        assert_eq!(result.wkt(), "POINT(-75.6972 45.4215)");
        assert_eq!(result.xy(), vec![-75.6972, 45.4215]);
        assert_eq!(result.latlng(), vec![45.4215, -75.6972]);
    }

    #[test]
    fn test_views_without_coordinates() {
        let result = load(r#"{"results": [{"formatted": "Somewhere", "lat": 45.0}]}"#);
        assert!(!result.ok());
        assert_eq!(result.geometry(), json!({}));
        assert_eq!(result.wkt(), "");
        assert!(result.xy().is_empty());
        assert!(result.latlng().is_empty());
    }

    #[test]
    fn test_geojson_feature() {
        let result = load(&ok_body());
        let feature = result.geojson();

        assert_eq!(feature["type"], json!("Feature"));
        assert_eq!(feature["bbox"], json!([-76.0, 45.0, -75.5, 45.5]));
        assert_eq!(feature["properties"]["bbox"], json!([-76.0, 45.0, -75.5, 45.5]));
        assert_eq!(feature["properties"]["city"], json!("Ottawa"));
        assert_eq!(feature["geometry"]["type"], json!("Point"));
    }

    #[test]
    fn test_geojson_without_geometry_or_bbox() {
        let result = load(r#"{"results": []}"#);
        let feature = result.geojson();
        let members = feature.as_object().unwrap();

        assert!(!members.contains_key("bbox"));
        assert!(!members.contains_key("geometry"));
        assert_eq!(feature["properties"]["ok"], json!(false));
    }
}
