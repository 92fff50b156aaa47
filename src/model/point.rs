//! Point3 and PointKey: coordinates and their hashable graph keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Quantization steps per unit used when keying coordinates.
pub const KEY_SCALE: f64 = 1_000_000.0;

/// Largest coordinate magnitude a [`PointKey`] represents exactly at
/// `KEY_SCALE` resolution. `i64` tops out near 9.22e12 units; the bound
/// leaves headroom below that.
pub const MAX_KEY_COORD: f64 = 1.0e12;

/// A point in harness space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Key for this point. See [`PointKey`] for the quantization rules.
    pub fn key(&self) -> PointKey {
        PointKey::from(*self)
    }

    /// Key for this point, or `None` if any coordinate is non-finite or
    /// outside `±MAX_KEY_COORD`.
    pub fn try_key(&self) -> Option<PointKey> {
        PointKey::try_new(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

// ============================================================================
// PointKey
// ============================================================================

/// Exact-equality key for a [`Point3`].
///
/// Each coordinate is stored as `round(v * KEY_SCALE)`, so `-0.0` and `0.0`
/// share a key and sub-micro noise from arithmetic (e.g. `-3 + 0.1 + 0.2`)
/// collapses onto one node.
///
/// Only finite coordinates within `±MAX_KEY_COORD` are representable.
/// [`PointKey::try_new`] and [`Point3::try_key`] return `None` outside that
/// range and parsing rejects it. The infallible constructors clamp instead
/// (`NaN` keys as 0), so use them only for coordinates already known to fit.
///
/// `Display` renders the canonical `"x,y,z"` form and `FromStr` parses it
/// back, which is also the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PointKey {
    x: i64,
    y: i64,
    z: i64,
}

impl PointKey {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: quantize(x),
            y: quantize(y),
            z: quantize(z),
        }
    }

    /// Checked form of [`PointKey::new`].
    pub fn try_new(x: f64, y: f64, z: f64) -> Option<Self> {
        if [x, y, z].iter().all(|v| is_representable(*v)) {
            Some(Self::new(x, y, z))
        } else {
            None
        }
    }

    pub fn to_point(&self) -> Point3 {
        Point3 {
            x: self.x as f64 / KEY_SCALE,
            y: self.y as f64 / KEY_SCALE,
            z: self.z as f64 / KEY_SCALE,
        }
    }
}

pub fn is_representable(v: f64) -> bool {
    v.is_finite() && v.abs() <= MAX_KEY_COORD
}

fn quantize(v: f64) -> i64 {
    let clamped = if v.is_nan() { 0.0 } else { v.clamp(-MAX_KEY_COORD, MAX_KEY_COORD) };
    (clamped * KEY_SCALE).round() as i64
}

impl From<Point3> for PointKey {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<&Point3> for PointKey {
    fn from(p: &Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<PointKey> for Point3 {
    fn from(k: PointKey) -> Self {
        k.to_point()
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_point(), f)
    }
}

impl FromStr for PointKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut coords = [0.0_f64; 3];
        let mut parts = s.split(',');
        for slot in coords.iter_mut() {
            let part = parts
                .next()
                .ok_or_else(|| Error::InvalidKey(format!("'{s}': expected three coordinates")))?;
            let v: f64 = part
                .trim()
                .parse()
                .map_err(|_| Error::InvalidKey(format!("'{s}': '{}' is not a number", part.trim())))?;
            if !is_representable(v) {
                return Err(Error::InvalidKey(format!(
                    "'{s}': coordinates must be finite and within ±{MAX_KEY_COORD:e}"
                )));
            }
            *slot = v;
        }
        if parts.next().is_some() {
            return Err(Error::InvalidKey(format!("'{s}': expected three coordinates")));
        }
        Ok(Self::new(coords[0], coords[1], coords[2]))
    }
}

impl TryFrom<String> for PointKey {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PointKey> for String {
    fn from(k: PointKey) -> Self {
        k.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_display_drops_trailing_zero() {
        let p = Point3::new(-3.0, 16.0, -3.0);
        assert_eq!(p.to_string(), "-3,16,-3");
        assert_eq!(p.key().to_string(), "-3,16,-3");
    }

    #[test]
    fn test_negative_zero_shares_key() {
        assert_eq!(PointKey::new(-0.0, 0.0, 0.0), PointKey::new(0.0, 0.0, 0.0));
        assert_eq!(PointKey::new(-0.0, 1.0, 2.0).to_string(), "0,1,2");
    }

    #[test]
    fn test_float_noise_collapses() {
        let noisy = PointKey::new(0.1 + 0.2, 7.0, -3.0);
        let clean = PointKey::new(0.3, 7.0, -3.0);
        assert_eq!(noisy, clean);
    }

    #[test]
    fn test_parse_key() {
        let key: PointKey = "-18, 7 ,48".parse().unwrap();
        assert_eq!(key.to_point(), Point3::new(-18.0, 7.0, 48.0));
        let fractional: PointKey = "1.5,-2.25,0".parse().unwrap();
        assert_eq!(fractional.to_string(), "1.5,-2.25,0");
    }

    #[test]
    fn test_parse_key_rejects_malformed() {
        for bad in ["", "1,2", "1,2,3,4", "a,b,c", "1,,3", "NaN,1,2", "inf,0,0", "0,0,1e13"] {
            assert!(
                matches!(bad.parse::<PointKey>(), Err(Error::InvalidKey(_))),
                "expected InvalidKey for {bad:?}"
            );
        }
    }

    #[test]
    fn test_try_key_rejects_unrepresentable() {
        assert!(Point3::new(f64::NAN, 0.0, 0.0).try_key().is_none());
        assert!(Point3::new(0.0, f64::INFINITY, 0.0).try_key().is_none());
        assert!(Point3::new(0.0, 0.0, f64::NEG_INFINITY).try_key().is_none());
        assert!(Point3::new(0.0, 0.0, 1.0e13).try_key().is_none());
        assert!(Point3::new(0.0, 0.0, -5.0e297).try_key().is_none());
    }

    #[test]
    fn test_try_key_accepts_range_bounds() {
        let edge = Point3::new(-MAX_KEY_COORD, 0.0, MAX_KEY_COORD);
        let key = edge.try_key().unwrap();
        assert_eq!(key, edge.key());
        assert_eq!(key.to_point(), edge);
    }

    #[test]
    fn test_unchecked_key_clamps_instead_of_wrapping() {
        let clamped = PointKey::new(0.0, 0.0, 5.0e13);
        assert_eq!(clamped.to_point().z, MAX_KEY_COORD);
        assert_eq!(PointKey::new(f64::NAN, 1.0, 2.0), PointKey::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let key = PointKey::new(-5.0, 7.0, 25.0);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"-5,7,25\"");
        let back: PointKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
