//! # Harness Model
//!
//! Plain value types shared by the simulator, mapper, solver and workbench.
//!
//! Design rule: this module is pure data. No I/O, no state, no logging.

pub mod point;
pub mod wire;
pub mod fault;
pub mod path;
pub mod access;

pub use point::{Point3, PointKey, KEY_SCALE, MAX_KEY_COORD};
pub use wire::{WireSpec, WireCatalog};
pub use fault::{FaultType, FaultEstimate};
pub use path::PathResult;
pub use access::AccessNode;
