//! Geometry helpers: Euclidean distance and coordinate-string conversion.

use crate::model::{Point3, PointKey};
use crate::Result;

/// Straight-line distance between two points.
pub fn euclidean_distance(a: &Point3, b: &Point3) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let dz = b.z - a.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Edge weight between two graph nodes, derived from their keys.
pub fn key_distance(a: &PointKey, b: &PointKey) -> f64 {
    euclidean_distance(&a.to_point(), &b.to_point())
}

/// Parse a canonical `"x,y,z"` coordinate string.
pub fn parse_key(notation: &str) -> Result<PointKey> {
    notation.parse()
}

/// Render a key as its canonical `"x,y,z"` string.
pub fn format_key(key: &PointKey) -> String {
    key.to_string()
}
