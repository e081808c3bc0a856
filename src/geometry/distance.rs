use geo::{Distance, Haversine, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Kilometers,
    Meters,
    Miles,
    Feet,
}

impl Units {
    fn convert(&self, meters: f64) -> f64 {
        match self {
            Units::Kilometers => meters / 1000.0,
            Units::Meters => meters,
            Units::Miles => meters / 1609.344,
            Units::Feet => meters / 0.3048,
        }
    }
}

/// Great-circle distance between two `(lat, lng)` points
pub fn distance(a: (f64, f64), b: (f64, f64), units: Units) -> f64 {
    // geo points are (x, y) = (lng, lat)
    let origin = Point::new(a.1, a.0);
    let destination = Point::new(b.1, b.0);
    units.convert(Haversine::distance(origin, destination))
}
