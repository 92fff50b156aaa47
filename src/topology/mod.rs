//! # Topology Trait
//!
//! The contract between the path solver and whatever holds the harness
//! adjacency. The graph carries topology only; edge weights are always
//! recomputed from node coordinates.
//!
//! ## Implementations
//!
//! | Type | Module | Description |
//! |------|--------|-------------|
//! | `HarnessGraph` | `memory` | Ordered in-memory adjacency lists |
//! | `HashMap<PointKey, Vec<PointKey>>` | here | Plain map, for ad hoc graphs |

pub mod memory;
pub mod builtin;

use std::collections::HashMap;

use crate::model::PointKey;

pub use memory::HarnessGraph;

/// Read-only view of a harness adjacency structure.
///
/// Implementations must be deterministic: `node_keys` and `neighbors`
/// return the same order on every call.
pub trait Topology {
    /// Whether `key` is a node of the graph.
    fn contains(&self, key: &PointKey) -> bool;

    /// Neighbors of `key` in declaration order, or `None` if `key` is not a node.
    fn neighbors(&self, key: &PointKey) -> Option<&[PointKey]>;

    /// Every node key.
    fn node_keys(&self) -> Vec<PointKey>;

    fn node_count(&self) -> usize {
        self.node_keys().len()
    }
}

impl<T: Topology + ?Sized> Topology for &T {
    fn contains(&self, key: &PointKey) -> bool {
        (**self).contains(key)
    }

    fn neighbors(&self, key: &PointKey) -> Option<&[PointKey]> {
        (**self).neighbors(key)
    }

    fn node_keys(&self) -> Vec<PointKey> {
        (**self).node_keys()
    }

    fn node_count(&self) -> usize {
        (**self).node_count()
    }
}

/// Node order is the sorted key order, since `HashMap` has none of its own.
impl Topology for HashMap<PointKey, Vec<PointKey>> {
    fn contains(&self, key: &PointKey) -> bool {
        self.contains_key(key)
    }

    fn neighbors(&self, key: &PointKey) -> Option<&[PointKey]> {
        self.get(key).map(Vec::as_slice)
    }

    fn node_keys(&self) -> Vec<PointKey> {
        let mut keys: Vec<PointKey> = self.keys().copied().collect();
        keys.sort();
        keys
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
