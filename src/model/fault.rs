//! Fault types and the outcome of one reflectometry run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Kind of discontinuity assumed at the fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultType {
    #[default]
    Short,
    Open,
}

impl FaultType {
    /// Scalar applied to the incident pulse to form the echo.
    pub fn reflection_coefficient(&self) -> f64 {
        match self {
            FaultType::Short => 0.5,
            FaultType::Open => -1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultType::Short => "short",
            FaultType::Open => "open",
        }
    }
}

impl fmt::Display for FaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(FaultType::Short),
            "open" => Ok(FaultType::Open),
            _ => Err(Error::UnknownFaultType(s.to_string())),
        }
    }
}

/// Estimated fault distance along the wire, plus the assumed fault type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultEstimate {
    pub fault_distance: f64,
    pub fault_type: FaultType,
}
