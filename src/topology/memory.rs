//! In-memory harness graph.
//!
//! Adjacency lists keyed by [`PointKey`], plus the order in which nodes were
//! declared so iteration and export are reproducible.
//!
//! ## Limitations
//!
//! - **No validation**: neighbors that are not themselves nodes are kept as
//!   written. The solver treats them as unreachable. Use
//!   [`HarnessGraph::dangling_neighbors`] to find them.
//! - **Build, then share**: there is no interior mutability. Build the graph
//!   once and share it by reference or `Arc`; it is `Send + Sync`.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::{Point3, PointKey};
use crate::Result;
use super::Topology;

/// Most harness nodes have at most a handful of neighbors.
pub type NeighborList = SmallVec<[PointKey; 4]>;

/// Undirected harness adjacency over named 3-D points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarnessGraph {
    adjacency: HashMap<PointKey, NeighborList>,
    /// Node keys in declaration order.
    order: Vec<PointKey>,
}

impl HarnessGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a literal of `("x,y,z", ["x,y,z", ...])` rows.
    pub fn from_literal(rows: &[(&str, &[&str])]) -> Result<Self> {
        let mut graph = Self::new();
        for (node, neighbors) in rows {
            let key: PointKey = node.parse()?;
            let neighbors = neighbors
                .iter()
                .map(|n| n.parse())
                .collect::<Result<NeighborList>>()?;
            graph.insert_node(key, neighbors);
        }
        Ok(graph)
    }

    /// Insert or replace a node's neighbor list exactly as given.
    pub fn insert_node(&mut self, key: impl Into<PointKey>, neighbors: impl IntoIterator<Item = PointKey>) {
        let key = key.into();
        let neighbors: NeighborList = neighbors.into_iter().collect();
        if self.adjacency.insert(key, neighbors).is_none() {
            self.order.push(key);
        }
    }

    /// Add an undirected edge, creating either endpoint if needed.
    /// Existing edges are not duplicated.
    pub fn connect(&mut self, a: impl Into<PointKey>, b: impl Into<PointKey>) {
        let a = a.into();
        let b = b.into();
        self.link(a, b);
        self.link(b, a);
    }

    fn link(&mut self, from: PointKey, to: PointKey) {
        if !self.adjacency.contains_key(&from) {
            self.order.push(from);
        }
        let list = self.adjacency.entry(from).or_default();
        if !list.contains(&to) {
            list.push(to);
        }
    }

    /// Neighbor references that do not name a node, as `(node, neighbor)` pairs.
    pub fn dangling_neighbors(&self) -> Vec<(PointKey, PointKey)> {
        self.iter()
            .flat_map(|(node, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |n| !self.adjacency.contains_key(*n))
                    .map(move |n| (*node, *n))
            })
            .collect()
    }

    /// Nodes with their neighbor lists, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&PointKey, &[PointKey])> + '_ {
        self.order
            .iter()
            .filter_map(|k| self.adjacency.get(k).map(|n| (k, n.as_slice())))
    }

    pub fn positions(&self) -> Vec<Point3> {
        self.order.iter().map(PointKey::to_point).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum()
    }
}

impl Topology for HarnessGraph {
    fn contains(&self, key: &PointKey) -> bool {
        self.adjacency.contains_key(key)
    }

    fn neighbors(&self, key: &PointKey) -> Option<&[PointKey]> {
        self.adjacency.get(key).map(|n| n.as_slice())
    }

    fn node_keys(&self) -> Vec<PointKey> {
        self.order.clone()
    }

    fn node_count(&self) -> usize {
        self.order.len()
    }
}
