//! Confidence score from bounding-box extent.

use crate::domain::BoundingBox;
use crate::geometry::{Units, distance};

/// `(score, maximum diagonal in km)`; the first maximum the distance falls
/// under wins.
const THRESHOLDS: [(u8, f64); 9] = [
    (10, 0.25),
    (9, 0.5),
    (8, 1.0),
    (7, 5.0),
    (6, 7.5),
    (5, 10.0),
    (4, 15.0),
    (3, 20.0),
    (2, 25.0),
];

/// Score a diagonal distance in kilometers, 1 (coarse) to 10 (precise)
pub fn score_for_distance(km: f64) -> u8 {
    THRESHOLDS
        .iter()
        .find(|(_, maximum)| km < *maximum)
        .map(|(score, _)| *score)
        .unwrap_or(1)
}

/// Quality score 0-10; 0 means no bounding box to judge from.
pub fn confidence(bbox: Option<&BoundingBox>) -> u8 {
    match bbox {
        Some(bbox) => {
            let km = distance(
                (bbox.north, bbox.east),
                (bbox.south, bbox.west),
                Units::Kilometers,
            );
            score_for_distance(km)
        }
        None => 0,
    }
}
