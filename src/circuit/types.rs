//! Core types describing a circuit to analyze.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircuitError;

/// One of the three fixed series topologies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topology {
    /// Series resistor-capacitor
    #[serde(rename = "RC")]
    Rc,
    /// Series resistor-inductor
    #[serde(rename = "RL")]
    Rl,
    /// Series resistor-inductor-capacitor
    #[serde(rename = "RLC")]
    Rlc,
}

impl Topology {
    /// Whether the topology contains an inductor.
    pub fn uses_inductance(&self) -> bool {
        matches!(self, Topology::Rl | Topology::Rlc)
    }

    /// Whether the topology contains a capacitor.
    pub fn uses_capacitance(&self) -> bool {
        matches!(self, Topology::Rc | Topology::Rlc)
    }

    /// Canonical upper-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Rc => "RC",
            Topology::Rl => "RL",
            Topology::Rlc => "RLC",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RC" => Ok(Topology::Rc),
            "RL" => Ok(Topology::Rl),
            "RLC" => Ok(Topology::Rlc),
            _ => Err(CircuitError::UnknownTopology { name: s.to_string() }),
        }
    }
}

/// Idealized source waveform applied at t = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Unit step u(t) scaled by the source amplitude
    #[default]
    Step,
    /// Unit-area impulse δ(t) scaled by the source amplitude
    Impulse,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Step => "step",
            InputType::Impulse => "impulse",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "step" => Ok(InputType::Step),
            "impulse" => Ok(InputType::Impulse),
            _ => Err(CircuitError::UnknownInputType { name: s.to_string() }),
        }
    }
}

/// Component values and source amplitude for one computation.
///
/// Values a topology does not use are ignored, so `inductance` may be left
/// at zero for an RC circuit and `capacitance` at zero for an RL circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitParameters {
    /// Resistance in ohms
    pub resistance: f64,
    /// Inductance in henries
    pub inductance: f64,
    /// Capacitance in farads
    pub capacitance: f64,
    /// Source amplitude in volts
    pub source_amplitude: f64,
}

impl CircuitParameters {
    /// Create a full parameter set.
    pub fn new(resistance: f64, inductance: f64, capacitance: f64, source_amplitude: f64) -> Self {
        Self {
            resistance,
            inductance,
            capacitance,
            source_amplitude,
        }
    }

    /// Parameters for a series RC circuit.
    pub fn rc(resistance: f64, capacitance: f64, source_amplitude: f64) -> Self {
        Self::new(resistance, 0.0, capacitance, source_amplitude)
    }

    /// Parameters for a series RL circuit.
    pub fn rl(resistance: f64, inductance: f64, source_amplitude: f64) -> Self {
        Self::new(resistance, inductance, 0.0, source_amplitude)
    }

    /// Parameters for a series RLC circuit.
    pub fn rlc(resistance: f64, inductance: f64, capacitance: f64, source_amplitude: f64) -> Self {
        Self::new(resistance, inductance, capacitance, source_amplitude)
    }

    /// Return a copy with a different resistance.
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Return a copy with a different source amplitude.
    pub fn with_source_amplitude(mut self, source_amplitude: f64) -> Self {
        self.source_amplitude = source_amplitude;
        self
    }

    /// First-order time constant for RC (`RC`) or RL (`L/R`).
    ///
    /// For RLC this is the envelope time constant `2L/R = 1/α`.
    pub fn characteristic_time(&self, topology: Topology) -> f64 {
        match topology {
            Topology::Rc => self.resistance * self.capacitance,
            Topology::Rl => self.inductance / self.resistance,
            Topology::Rlc => 2.0 * self.inductance / self.resistance,
        }
    }
}
