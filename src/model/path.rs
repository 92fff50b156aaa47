//! PathResult: outcome of a shortest-path search.

use serde::{Deserialize, Serialize};

use super::{Point3, PointKey};

/// Ordered node keys from start to target (inclusive) and their total length.
///
/// `distance == f64::INFINITY` with an empty `path` is the "no path" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub distance: f64,
    pub path: Vec<PointKey>,
}

impl PathResult {
    pub fn no_path() -> Self {
        Self { distance: f64::INFINITY, path: Vec::new() }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty() && self.distance.is_finite()
    }

    pub fn start(&self) -> Option<&PointKey> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&PointKey> {
        self.path.last()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Path resolved back to coordinates, for drawing as a connected line.
    pub fn polyline(&self) -> Vec<Point3> {
        self.path.iter().map(PointKey::to_point).collect()
    }
}

impl Default for PathResult {
    fn default() -> Self {
        Self::no_path()
    }
}
