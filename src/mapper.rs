//! Fault Mapper: turn a distance along a wire into a harness coordinate.
//!
//! Wires in this harness model run along the z axis, so the fault lies at
//! the wire's start displaced by the distance in z. Results are not clamped
//! to the wire or the airframe.

use crate::model::Point3;

pub fn map_fault_to_coordinates(start: Point3, fault_distance: f64) -> Point3 {
    let mapped = Point3 {
        x: start.x,
        y: start.y,
        z: start.z + fault_distance,
    };
    tracing::trace!(%start, fault_distance, %mapped, "mapped fault coordinates");
    mapped
}
