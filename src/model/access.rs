//! Access nodes: the Functional Identification Numbers (FINs) a technician
//! can start a route from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Point3, PointKey};
use crate::{Error, Result};

/// One of the four harness access points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessNode {
    #[default]
    Fin1,
    Fin2,
    Fin3,
    Fin4,
}

impl AccessNode {
    pub const ALL: [AccessNode; 4] = [
        AccessNode::Fin1,
        AccessNode::Fin2,
        AccessNode::Fin3,
        AccessNode::Fin4,
    ];

    pub fn position(&self) -> Point3 {
        match self {
            AccessNode::Fin1 => Point3::new(-18.0, 7.0, 48.0),
            AccessNode::Fin2 => Point3::new(-18.0, 7.0, 40.0),
            AccessNode::Fin3 => Point3::new(-11.0, 7.0, 40.0),
            AccessNode::Fin4 => Point3::new(-18.0, 10.0, 50.0),
        }
    }

    pub fn key(&self) -> PointKey {
        self.position().key()
    }

    pub fn number(&self) -> u8 {
        match self {
            AccessNode::Fin1 => 1,
            AccessNode::Fin2 => 2,
            AccessNode::Fin3 => 3,
            AccessNode::Fin4 => 4,
        }
    }
}

impl fmt::Display for AccessNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fin {}", self.number())
    }
}

/// Accepts `"Fin 1"`, `"fin1"`, `"FIN-1"` and bare `"1"`.
impl FromStr for AccessNode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let digits = lowered
            .strip_prefix("fin")
            .unwrap_or(&lowered)
            .trim_start_matches([' ', '-', '_']);
        match digits {
            "1" => Ok(AccessNode::Fin1),
            "2" => Ok(AccessNode::Fin2),
            "3" => Ok(AccessNode::Fin3),
            "4" => Ok(AccessNode::Fin4),
            _ => Err(Error::UnknownAccessNode(s.to_string())),
        }
    }
}
