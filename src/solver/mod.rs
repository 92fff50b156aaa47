//! # Path Solver
//!
//! Dijkstra over a [`Topology`], with edge weights taken from the Euclidean
//! distance between node coordinates.
//!
//! The frontier is a binary heap ordered by tentative distance, ties broken
//! by enqueue order (first in, first out). Among several shortest paths of
//! equal length the one returned is whichever the search reached first;
//! that choice is not part of the contract.
//!
//! Failure is reported through [`PathResult::no_path`], never an error:
//! - the start or target has a coordinate that cannot be keyed (non-finite
//!   or beyond `MAX_KEY_COORD`), so it names no node;
//! - the start is not a node of the graph;
//! - the target is not a node, or not reachable from the start.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use crate::geometry::key_distance;
use crate::model::{PathResult, Point3, PointKey};
use crate::topology::Topology;

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// smaller distance first, then smaller sequence number.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    seq: u64,
    key: PointKey,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Shortest path from `start` to `target` through `graph`.
pub fn find_shortest_path<T>(start: Point3, target: Point3, graph: &T) -> PathResult
where
    T: Topology + ?Sized,
{
    let (Some(start_key), Some(target_key)) = (start.try_key(), target.try_key()) else {
        tracing::warn!(%start, %target, "endpoint coordinates cannot be keyed");
        return PathResult::no_path();
    };
    shortest_path_between(start_key, target_key, graph)
}

/// Key-level form of [`find_shortest_path`].
pub fn shortest_path_between<T>(start: PointKey, target: PointKey, graph: &T) -> PathResult
where
    T: Topology + ?Sized,
{
    tracing::debug!(%start, %target, "shortest path search");

    if !graph.contains(&start) {
        tracing::warn!(%start, "start node not found in graph");
        return PathResult::no_path();
    }

    let nodes = graph.node_keys();
    let mut distances: HashMap<PointKey, f64> = nodes.iter().map(|k| (*k, f64::INFINITY)).collect();
    let mut prev: HashMap<PointKey, PointKey> = HashMap::with_capacity(nodes.len());
    distances.insert(start, 0.0);

    let mut frontier = BinaryHeap::new();
    let mut seq = 0_u64;
    frontier.push(Frontier { distance: 0.0, seq, key: start });

    while let Some(Frontier { distance, key, .. }) = frontier.pop() {
        if key == target {
            break;
        }
        let best = distances.get(&key).copied().unwrap_or(f64::INFINITY);
        if distance > best {
            continue;
        }
        let Some(neighbors) = graph.neighbors(&key) else {
            continue;
        };
        for neighbor in neighbors {
            // Neighbors that are not nodes have no distance entry and stay unreachable.
            let Some(current) = distances.get_mut(neighbor) else {
                continue;
            };
            let alt = best + key_distance(&key, neighbor);
            if alt < *current {
                *current = alt;
                prev.insert(*neighbor, key);
                seq += 1;
                frontier.push(Frontier { distance: alt, seq, key: *neighbor });
            }
        }
    }

    let mut path = vec![target];
    let mut cursor = target;
    while let Some(p) = prev.get(&cursor) {
        path.push(*p);
        cursor = *p;
    }
    path.reverse();

    if path.first() != Some(&start) {
        tracing::debug!(%start, %target, "no connecting path");
        return PathResult::no_path();
    }

    let distance = distances.get(&target).copied().unwrap_or(f64::INFINITY);
    tracing::debug!(%start, %target, distance, hops = path.len() - 1, "shortest path found");
    PathResult { distance, path }
}
