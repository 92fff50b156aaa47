//! # Fault Simulator
//!
//! Synthetic time-domain reflectometry. A rectangular incident pulse is
//! sampled into `pulse_len` bins, an echo is formed from the window that
//! starts at the round-trip delay of the hypothesized fault, and the fault
//! distance is read back from the echo's peak.
//!
//! ```text
//! delay    = floor((2 * d / velocity) * pulse_len)
//! echo[i]  = incident[i] * coefficient     for i >= delay
//! estimate = argmax(echo) * velocity / (2 * pulse_len)
//! ```
//!
//! The echo reuses the incident window rather than a shifted copy, so once
//! the delay passes the high part of the pulse the echo holds only zeros and
//! the estimate falls back to 0. The same happens when the delay is outside
//! the pulse entirely. Both are degenerate outcomes, not errors.

use serde::{Deserialize, Serialize};

use crate::model::{FaultEstimate, FaultType, WireSpec};
use crate::{Error, Result};

/// Representative propagation velocity for coaxial cable, m/s.
pub const DEFAULT_PROPAGATION_VELOCITY: f64 = 2.5e8;
/// Samples in the synthetic pulse.
pub const DEFAULT_PULSE_LEN: usize = 100;
/// Leading samples of the pulse held high.
pub const DEFAULT_PULSE_HIGH_SAMPLES: usize = 20;
/// Largest accepted `pulse_len`. A run allocates three signals of this many
/// samples.
pub const MAX_PULSE_LEN: usize = 1 << 20;

// ============================================================================
// Configuration
// ============================================================================

/// Simulator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub propagation_velocity: f64,
    pub pulse_len: usize,
    pub pulse_high_samples: usize,
    pub fault_type: FaultType,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            propagation_velocity: DEFAULT_PROPAGATION_VELOCITY,
            pulse_len: DEFAULT_PULSE_LEN,
            pulse_high_samples: DEFAULT_PULSE_HIGH_SAMPLES,
            fault_type: FaultType::Short,
        }
    }
}

impl SimulationConfig {
    pub fn with_fault_type(mut self, fault_type: FaultType) -> Self {
        self.fault_type = fault_type;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.propagation_velocity.is_finite() && self.propagation_velocity > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "propagation_velocity must be positive and finite, got {}",
                self.propagation_velocity
            )));
        }
        if self.pulse_len == 0 {
            return Err(Error::InvalidConfig("pulse_len must be at least 1".into()));
        }
        if self.pulse_len > MAX_PULSE_LEN {
            return Err(Error::InvalidConfig(format!(
                "pulse_len ({}) exceeds the maximum of {MAX_PULSE_LEN}",
                self.pulse_len
            )));
        }
        if self.pulse_high_samples > self.pulse_len {
            return Err(Error::InvalidConfig(format!(
                "pulse_high_samples ({}) exceeds pulse_len ({})",
                self.pulse_high_samples, self.pulse_len
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Simulation trace
// ============================================================================

/// Every intermediate signal of one run, kept for plotting and inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationTrace {
    pub incident: Vec<f64>,
    pub reflected: Vec<f64>,
    /// `incident + reflected`, sample by sample.
    pub measured: Vec<f64>,
    /// Round-trip delay in samples; `usize::MAX` when the hypothesis was NaN.
    pub delay_index: usize,
    /// First index holding the echo's maximum.
    pub peak_index: usize,
    pub estimate: FaultEstimate,
}

impl SimulationTrace {
    /// True when the echo is all zero, i.e. the delay window missed the high
    /// part of the pulse.
    ///
    /// A zero estimate does not imply this: a short at delay 0 and an open
    /// fault past delay 0 both estimate 0 from a non-zero echo.
    pub fn is_degenerate(&self) -> bool {
        self.reflected.iter().all(|v| *v == 0.0)
    }
}

// ============================================================================
// FaultSimulator
// ============================================================================

/// Stateless reflectometry simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FaultSimulator {
    config: SimulationConfig,
}

impl FaultSimulator {
    /// Build a simulator, rejecting configurations that would divide by zero
    /// or produce a malformed pulse.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Distance represented by one sample of round-trip delay.
    pub fn discretization_step(&self) -> f64 {
        self.config.propagation_velocity / (2.0 * self.config.pulse_len as f64)
    }

    /// Round-trip delay, in samples, of a fault at `fault_distance`.
    ///
    /// Negative distances saturate to 0; NaN maps to `usize::MAX`, which is
    /// always outside the pulse.
    pub fn reflection_delay(&self, fault_distance: f64) -> usize {
        let delay = ((2.0 * fault_distance) / self.config.propagation_velocity
            * self.config.pulse_len as f64)
            .floor();
        if delay.is_nan() { usize::MAX } else { delay as usize }
    }

    pub fn incident_pulse(&self) -> Vec<f64> {
        (0..self.config.pulse_len)
            .map(|i| if i < self.config.pulse_high_samples { 1.0 } else { 0.0 })
            .collect()
    }

    /// Run the full simulation and keep every intermediate signal.
    pub fn run(&self, wire: &WireSpec, fault_distance: f64) -> SimulationTrace {
        let n = self.config.pulse_len;
        let fault_type = self.config.fault_type;
        let coefficient = fault_type.reflection_coefficient();

        let incident = self.incident_pulse();
        let delay_index = self.reflection_delay(fault_distance);

        let mut reflected = vec![0.0; n];
        if delay_index < n {
            for i in delay_index..n {
                reflected[i] = incident[i] * coefficient;
            }
        }

        let measured: Vec<f64> = incident
            .iter()
            .zip(&reflected)
            .map(|(a, b)| a + b)
            .collect();

        let peak_index = first_peak(&reflected);
        let fault_distance_estimate = peak_index as f64 * self.discretization_step();

        tracing::debug!(
            wire_length = wire.length,
            hypothesis = fault_distance,
            delay_index,
            peak_index,
            estimate = fault_distance_estimate,
            %fault_type,
            "estimated fault distance"
        );

        SimulationTrace {
            incident,
            reflected,
            measured,
            delay_index,
            peak_index,
            estimate: FaultEstimate {
                fault_distance: fault_distance_estimate,
                fault_type,
            },
        }
    }

    /// Estimate only.
    pub fn simulate(&self, wire: &WireSpec, fault_distance: f64) -> FaultEstimate {
        self.run(wire, fault_distance).estimate
    }
}

/// Index of the first maximum. `-0.0` and `0.0` compare equal here, so a
/// zero tail after negative samples counts as the peak.
fn first_peak(signal: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in signal.iter().enumerate().skip(1) {
        if *v > signal[best] {
            best = i;
        }
    }
    best
}

/// Simulate with the default configuration (coaxial velocity, 100-sample
/// pulse, short-circuit fault).
pub fn simulate_fault(wire: &WireSpec, fault_distance: f64) -> FaultEstimate {
    FaultSimulator::default().simulate(wire, fault_distance)
}
