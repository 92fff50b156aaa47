//! # harness-locator: wiring-harness fault localization
//!
//! Estimates where along a wire a fault sits from a synthetic
//! time-domain reflectometry (TDR) pulse, places that fault in harness
//! coordinates, and routes a technician to it from an access node.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: simulate, map and route are deterministic functions of
//!    their inputs. No I/O, no state between calls.
//! 2. **Sentinels, not errors**: "no path" and degenerate echoes are ordinary
//!    results. `Error` is reserved for malformed input (keys, config, JSON).
//! 3. **Topology-only graphs**: edge weights are always recomputed from node
//!    coordinates; the `Topology` trait is the seam to graph storage.
//!
//! ## Quick Start
//!
//! ```rust
//! use harness_locator::{
//!     find_shortest_path, map_fault_to_coordinates, simulate_fault,
//!     topology::builtin, AccessNode,
//! };
//!
//! let catalog = builtin::wire_catalog();
//! let wire = catalog.find_by_length(20.0).unwrap();
//!
//! let estimate = simulate_fault(wire, wire.length / 2.0);
//! let fault = map_fault_to_coordinates(wire.start, estimate.fault_distance);
//! let route = find_shortest_path(AccessNode::Fin1.position(), fault, &builtin::harness_graph());
//!
//! assert!(route.is_found());
//! assert_eq!(route.path.first().unwrap().to_string(), "-18,7,48");
//! ```
//!
//! ## Modules
//!
//! | Module | Role |
//! |--------|------|
//! | `model` | Value types: points, keys, wires, estimates, paths |
//! | `geometry` | Distances and coordinate-string conversion |
//! | `simulate` | TDR fault simulator |
//! | `mapper` | Fault distance → coordinate |
//! | `topology` | Harness adjacency trait, in-memory graph, built-in harness |
//! | `solver` | Dijkstra shortest path |
//! | `export` | JSON adjacency literal import/export |
//! | `workbench` | Selection-driven orchestrator |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod geometry;
pub mod simulate;
pub mod mapper;
pub mod topology;
pub mod solver;
pub mod export;
pub mod config;
pub mod workbench;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Point3, PointKey, WireSpec, WireCatalog,
    FaultType, FaultEstimate, PathResult, AccessNode,
};

// ============================================================================
// Re-exports: Engine
// ============================================================================

pub use geometry::{euclidean_distance, parse_key, format_key};
pub use simulate::{simulate_fault, FaultSimulator, SimulationConfig, SimulationTrace};
pub use mapper::map_fault_to_coordinates;
pub use solver::{find_shortest_path, shortest_path_between};
pub use topology::{Topology, HarnessGraph};

// ============================================================================
// Re-exports: Orchestration
// ============================================================================

pub use config::LocatorConfig;
pub use workbench::{Workbench, WorkbenchView, Localization};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown access node: {0}")]
    UnknownAccessNode(String),

    #[error("Unknown fault type: {0}")]
    UnknownFaultType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
