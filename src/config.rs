//! Locator configuration.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.
//!
//! ```json
//! {
//!   "simulation": { "propagation_velocity": 2.0e8, "fault_type": "open" },
//!   "hypothesis_ratio": 0.5,
//!   "default_target": { "x": -5, "y": 7, "z": 25 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Point3;
use crate::simulate::SimulationConfig;
use crate::topology::builtin::DEFAULT_TARGET;
use crate::{Error, Result};

/// Settings for the simulate → map → route pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    pub simulation: SimulationConfig,
    /// Hypothesized fault position as a fraction of the selected wire length.
    pub hypothesis_ratio: f64,
    /// Target used when the selected wire is not in the catalog.
    pub default_target: Point3,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            hypothesis_ratio: 0.5,
            default_target: DEFAULT_TARGET,
        }
    }
}

impl LocatorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;
        if !(self.hypothesis_ratio.is_finite() && self.hypothesis_ratio >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "hypothesis_ratio must be finite and non-negative, got {}",
                self.hypothesis_ratio
            )));
        }
        if !self.default_target.is_finite() {
            return Err(Error::InvalidConfig("default_target must be finite".into()));
        }
        Ok(())
    }
}
