//! WireSpec and WireCatalog: the selectable wire segments of a harness.

use serde::{Deserialize, Serialize};

use super::Point3;

/// One physical wire segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireSpec {
    pub length: f64,
    pub start: Point3,
}

impl WireSpec {
    pub const fn new(length: f64, start: Point3) -> Self {
        Self { length, start }
    }
}

/// Caller-supplied list of wires, in the order they are offered for selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireCatalog {
    wires: Vec<WireSpec>,
}

impl WireCatalog {
    pub fn new(wires: impl IntoIterator<Item = WireSpec>) -> Self {
        Self { wires: wires.into_iter().collect() }
    }

    /// First wire whose length equals `length` exactly.
    pub fn find_by_length(&self, length: f64) -> Option<&WireSpec> {
        self.wires.iter().find(|w| w.length == length)
    }

    pub fn lengths(&self) -> impl Iterator<Item = f64> + '_ {
        self.wires.iter().map(|w| w.length)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WireSpec> {
        self.wires.iter()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }
}

impl<'a> IntoIterator for &'a WireCatalog {
    type Item = &'a WireSpec;
    type IntoIter = std::slice::Iter<'a, WireSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.wires.iter()
    }
}

impl FromIterator<WireSpec> for WireCatalog {
    fn from_iter<I: IntoIterator<Item = WireSpec>>(iter: I) -> Self {
        Self::new(iter)
    }
}
