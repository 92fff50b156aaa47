//! # Workbench
//!
//! The interactive front of the engine: a technician picks a wire and an
//! access node, and the workbench keeps the estimated fault location and the
//! route to it up to date.
//!
//! ```text
//! select_wire_length ─► simulate ─► map ─► target ─┐
//!                                                  ├─► find_shortest_path ─► path
//! select_access_node / select_start ───────► start ─┘
//! ```
//!
//! Access nodes are the usual starts; any harness point may be used instead.
//!
//! Selection state sits behind a lock so a host may drive one workbench from
//! several threads. The engine calls themselves are pure.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;

use crate::config::LocatorConfig;
use crate::mapper::map_fault_to_coordinates;
use crate::model::{AccessNode, FaultEstimate, PathResult, Point3, WireCatalog, WireSpec};
use crate::simulate::FaultSimulator;
use crate::solver::find_shortest_path;
use crate::topology::builtin::{self, DEFAULT_WIRE_LENGTH};
use crate::topology::HarnessGraph;
use crate::Result;

/// Result of one simulate → map → route pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Localization {
    pub estimate: FaultEstimate,
    pub fault_point: Point3,
    pub path: PathResult,
}

/// Everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbenchView {
    pub selected_wire_length: f64,
    /// `None` when the start was set with [`Workbench::select_start`].
    pub selected_access_node: Option<AccessNode>,
    pub start: Point3,
    pub target: Point3,
    /// Empty when the selected wire is not in the catalog.
    pub fault_locations: Vec<Point3>,
    pub estimate: Option<FaultEstimate>,
    pub path: PathResult,
}

/// Thread-safe orchestrator over a shared harness graph.
pub struct Workbench {
    graph: Arc<HarnessGraph>,
    catalog: WireCatalog,
    config: LocatorConfig,
    simulator: FaultSimulator,
    state: RwLock<WorkbenchView>,
}

impl Workbench {
    /// Build a workbench with wire `5` and `Fin 1` selected.
    pub fn new(graph: Arc<HarnessGraph>, catalog: WireCatalog, config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        let simulator = FaultSimulator::new(config.simulation)?;
        let start = AccessNode::default().position();
        let state = WorkbenchView {
            selected_wire_length: DEFAULT_WIRE_LENGTH,
            selected_access_node: Some(AccessNode::default()),
            start,
            target: config.default_target,
            fault_locations: Vec::new(),
            estimate: None,
            path: PathResult::no_path(),
        };
        let workbench = Self {
            graph,
            catalog,
            config,
            simulator,
            state: RwLock::new(state),
        };
        workbench.select_wire_length(DEFAULT_WIRE_LENGTH);
        Ok(workbench)
    }

    /// The documented harness, wire catalog and default configuration.
    pub fn with_builtin() -> Self {
        Self::new(
            Arc::new(builtin::harness_graph()),
            builtin::wire_catalog(),
            LocatorConfig::default(),
        )
        .expect("default configuration is valid")
    }

    pub fn graph(&self) -> &Arc<HarnessGraph> {
        &self.graph
    }

    pub fn catalog(&self) -> &WireCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Select a wire by length and re-estimate the fault.
    ///
    /// A length missing from the catalog does not reach the simulator: the
    /// fault markers are cleared and the target falls back to
    /// `config.default_target`.
    pub fn select_wire_length(&self, length: f64) -> WorkbenchView {
        let mut state = self.state.write();
        state.selected_wire_length = length;
        match self.catalog.find_by_length(length) {
            Some(wire) => {
                let (estimate, fault_point) = self.estimate(wire);
                state.fault_locations = vec![fault_point];
                state.estimate = Some(estimate);
                state.target = fault_point;
            }
            None => {
                tracing::debug!(length, "wire not in catalog, resetting target");
                state.fault_locations.clear();
                state.estimate = None;
                state.target = self.config.default_target;
            }
        }
        state.path = find_shortest_path(state.start, state.target, self.graph.as_ref());
        state.clone()
    }

    /// Route from a different access node to the current target.
    pub fn select_access_node(&self, node: AccessNode) -> WorkbenchView {
        self.set_start(node.position(), Some(node))
    }

    /// Route from an arbitrary harness point to the current target. A point
    /// that is not a graph node yields the no-path sentinel.
    pub fn select_start(&self, start: Point3) -> WorkbenchView {
        self.set_start(start, None)
    }

    fn set_start(&self, start: Point3, node: Option<AccessNode>) -> WorkbenchView {
        let mut state = self.state.write();
        state.selected_access_node = node;
        state.start = start;
        state.path = find_shortest_path(state.start, state.target, self.graph.as_ref());
        state.clone()
    }

    pub fn snapshot(&self) -> WorkbenchView {
        self.state.read().clone()
    }

    /// One-shot pipeline for `wire` from `access_node`; does not touch the
    /// selection state.
    pub fn locate(&self, wire: &WireSpec, access_node: AccessNode) -> Localization {
        self.locate_from(wire, access_node.position())
    }

    /// [`Workbench::locate`] from an arbitrary start point.
    pub fn locate_from(&self, wire: &WireSpec, start: Point3) -> Localization {
        let (estimate, fault_point) = self.estimate(wire);
        let path = find_shortest_path(start, fault_point, self.graph.as_ref());
        Localization { estimate, fault_point, path }
    }

    fn estimate(&self, wire: &WireSpec) -> (FaultEstimate, Point3) {
        let hypothesis = wire.length * self.config.hypothesis_ratio;
        let estimate = self.simulator.simulate(wire, hypothesis);
        let fault_point = map_fault_to_coordinates(wire.start, estimate.fault_distance);
        (estimate, fault_point)
    }
}
