//! End-to-end tests for the simulate -> map -> route pipeline.
//!
//! Each test runs against the built-in 11-node harness and seven-wire catalog.

use std::sync::Arc;

use harness_locator::topology::builtin;
use harness_locator::{
    find_shortest_path, map_fault_to_coordinates, simulate_fault, AccessNode, FaultSimulator,
    FaultType, HarnessGraph, LocatorConfig, PathResult, Point3, PointKey, SimulationConfig,
    Workbench, WireSpec,
};
use harness_locator::model::MAX_KEY_COORD;
use pretty_assertions::assert_eq;

// ============================================================================
// 1. Worked example: 20 m wire, fault hypothesized at half length, Fin 1
// ============================================================================

#[test]
fn test_twenty_metre_wire_from_fin1() {
    let wire = WireSpec::new(20.0, Point3::new(-3.0, 16.0, -3.0));
    let estimate = simulate_fault(&wire, 10.0);

    let step = FaultSimulator::default().discretization_step();
    assert!(
        (estimate.fault_distance - 10.0).abs() <= step,
        "estimate {} more than one step ({step}) from 10",
        estimate.fault_distance,
    );
    assert_eq!(estimate.fault_type, FaultType::Short);

    let fault = map_fault_to_coordinates(wire.start, estimate.fault_distance);
    assert_eq!(fault, Point3::new(-3.0, 16.0, -3.0 + estimate.fault_distance));

    let route = find_shortest_path(Point3::new(-18.0, 7.0, 48.0), fault, &builtin::harness_graph());
    assert!(route.is_found());
    assert_eq!(route.path.first().map(ToString::to_string).as_deref(), Some("-18,7,48"));
    assert_eq!(route.path.last(), Some(&PointKey::from(fault)));
    assert!(route.distance.is_finite());
}

// ============================================================================
// 2. Every catalog wire from every access node
// ============================================================================

#[test]
fn test_every_wire_from_every_fin() {
    let bench = Workbench::with_builtin();
    for fin in AccessNode::ALL {
        for wire in builtin::wire_catalog().iter() {
            let loc = bench.locate(wire, fin);
            // Default velocity keeps every hypothesis inside sample 0.
            assert_eq!(loc.estimate.fault_distance, 0.0);
            assert_eq!(loc.fault_point, wire.start);
            if wire.length == 12.0 {
                // (-5,7,-4) is not a harness node.
                assert!(!loc.path.is_found(), "{fin}: 12 m wire should be unroutable");
            } else {
                assert!(loc.path.is_found(), "{fin} -> {} m wire", wire.length);
                assert_eq!(loc.path.start(), Some(&fin.key()));
            }
        }
    }
}

// ============================================================================
// 3. Workbench selection flow
// ============================================================================

#[test]
fn test_workbench_follows_selections() {
    let bench = Workbench::with_builtin();

    let view = bench.select_wire_length(25.0);
    assert_eq!(view.target, Point3::new(-5.0, 16.0, 25.0));
    assert_eq!(view.fault_locations.len(), 1);

    let view = bench.select_access_node(AccessNode::Fin4);
    assert_eq!(
        view.path.path.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["-18,10,50", "-7,5,20", "-3,16,-3", "-5,16,25"],
    );

    let view = bench.select_wire_length(99.0);
    assert!(view.fault_locations.is_empty());
    assert_eq!(view.target, builtin::DEFAULT_TARGET);
    assert_eq!(bench.snapshot(), view);
}

#[test]
fn test_workbench_with_slow_line_moves_fault() {
    // 100 m/s over 100 samples: one sample of delay is half a metre.
    let config = LocatorConfig {
        simulation: SimulationConfig { propagation_velocity: 100.0, ..SimulationConfig::default() },
        ..LocatorConfig::default()
    };
    let bench = Workbench::new(
        Arc::new(builtin::harness_graph()),
        builtin::wire_catalog(),
        config,
    )
    .unwrap();

    // 7 m wire, hypothesis 3.5 m -> delay 7 samples -> estimate 3.5 m.
    let view = bench.select_wire_length(7.0);
    assert_eq!(view.estimate.map(|e| e.fault_distance), Some(3.5));
    assert_eq!(view.target, Point3::new(-2.0, 7.0, 18.5));
    // The displaced fault is not a harness node, so there is no route to it.
    assert!(!view.path.is_found());
}

#[test]
fn test_workbench_fast_open_line_target_is_unroutable() {
    // Open fault at delay 0 peaks at sample 20: estimate = 20 * 1e300 / 200.
    let config = LocatorConfig {
        simulation: SimulationConfig {
            propagation_velocity: 1.0e300,
            fault_type: FaultType::Open,
            ..SimulationConfig::default()
        },
        ..LocatorConfig::default()
    };
    // A node where a clamped key of the displaced fault would land.
    let mut graph: HarnessGraph = builtin::harness_graph();
    graph.connect(Point3::new(-5.0, 7.0, 25.0), Point3::new(-5.0, 7.0, MAX_KEY_COORD));
    let bench = Workbench::new(Arc::new(graph), builtin::wire_catalog(), config).unwrap();

    let view = bench.select_wire_length(5.0);
    assert!(view.estimate.is_some_and(|e| e.fault_distance > 1.0e298));
    assert!(view.target.z > MAX_KEY_COORD);
    assert!(view.target.try_key().is_none());
    assert_eq!(view.path, PathResult::no_path());
}

#[test]
fn test_locate_from_junction() {
    let bench = Workbench::with_builtin();
    let wire = builtin::wire_catalog().find_by_length(20.0).copied().unwrap();
    let junction = Point3::new(-5.0, 7.0, 25.0);
    let loc = bench.locate_from(&wire, junction);
    assert!(loc.path.is_found());
    assert_eq!(loc.path.start(), Some(&junction.key()));
    assert_eq!(loc.path.end(), Some(&PointKey::from(wire.start)));
}

#[test]
fn test_workbench_is_shareable_across_threads() {
    let bench = Arc::new(Workbench::with_builtin());
    let handles: Vec<_> = AccessNode::ALL
        .into_iter()
        .map(|fin| {
            let bench = Arc::clone(&bench);
            std::thread::spawn(move || bench.locate(&builtin::wire_catalog().iter().next().copied().unwrap(), fin))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().path.is_found());
    }
}
