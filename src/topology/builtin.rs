//! The documented aircraft harness: four access nodes feeding a seven-node
//! wiring core, and the catalog of wires a technician can select.

use crate::model::{Point3, WireCatalog, WireSpec};
use super::HarnessGraph;

/// Fault target used when a selected wire is not in the catalog.
pub const DEFAULT_TARGET: Point3 = Point3::new(-5.0, 7.0, 25.0);

/// Wire length selected before the user picks one.
pub const DEFAULT_WIRE_LENGTH: f64 = 5.0;

const HARNESS: &[(&str, &[&str])] = &[
    ("-18,7,48", &["-7,5,20"]),  // Fin 1
    ("-18,7,40", &["-7,5,20"]),  // Fin 2
    ("-11,7,40", &["-7,5,20"]),  // Fin 3
    ("-18,10,50", &["-7,5,20"]), // Fin 4
    ("-7,5,20", &["-3,5,-3", "-3,16,-3"]),
    ("-3,5,-3", &["-7,5,20", "-5,7,25", "-5,7,4"]),
    ("-3,16,-3", &["-7,5,20", "-5,16,25", "-5,7,4"]),
    ("-5,16,25", &["-3,16,-3", "-5,7,25"]),
    ("-5,7,25", &["-3,16,-3", "-5,16,25", "-2,7,15"]),
    ("-5,7,4", &["-3,5,-3", "-3,16,-3"]),
    ("-2,7,15", &["-5,7,25"]),
];

const WIRES: [WireSpec; 7] = [
    WireSpec::new(10.0, Point3::new(-7.0, 5.0, 20.0)),
    WireSpec::new(15.0, Point3::new(-3.0, 5.0, -3.0)),
    WireSpec::new(20.0, Point3::new(-3.0, 16.0, -3.0)),
    WireSpec::new(25.0, Point3::new(-5.0, 16.0, 25.0)),
    WireSpec::new(5.0, Point3::new(-5.0, 7.0, 25.0)),
    WireSpec::new(7.0, Point3::new(-2.0, 7.0, 15.0)),
    WireSpec::new(12.0, Point3::new(-5.0, 7.0, -4.0)),
];

/// The 11-node harness graph. Adjacency is kept exactly as documented,
/// including its one-way links (e.g. `-7,5,20` does not list the access nodes).
pub fn harness_graph() -> HarnessGraph {
    HarnessGraph::from_literal(HARNESS).expect("builtin harness keys are well-formed")
}

pub fn wire_catalog() -> WireCatalog {
    WireCatalog::new(WIRES)
}
