//! Error types for the CircuitLab response engine.
//!
//! This module provides a unified error type [`CircuitError`] that covers
//! parameter validation, time-grid validation, lookups, value parsing and
//! output. The closed-form computations themselves never fail; errors only
//! come from the checked entry points and the outer surfaces.

use thiserror::Error;

/// Result type alias using [`CircuitError`].
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Unified error type for all CircuitLab operations.
#[derive(Error, Debug)]
pub enum CircuitError {
    // ============ Parameter Errors ============
    /// A circuit parameter is outside its physical domain
    #[error("Invalid parameter '{param}' (value: {value}): {message}")]
    InvalidParameter {
        param: &'static str,
        value: f64,
        message: String,
    },

    /// Unknown circuit topology name
    #[error("Unknown topology '{name}' (expected RC, RL or RLC)")]
    UnknownTopology { name: String },

    /// Unknown input type name
    #[error("Unknown input type '{name}' (expected step or impulse)")]
    UnknownInputType { name: String },

    // ============ Simulation Errors ============
    /// Invalid time grid or engine setting
    #[error("Invalid simulation parameter: {message}")]
    InvalidSimulationParam { message: String },

    // ============ Lookup / Parse Errors ============
    /// Material not present in the material table
    #[error("Unknown material '{name}'")]
    UnknownMaterial { name: String },

    /// Material lacks the property a formula needs
    #[error("Material '{material}' has no {property} value")]
    MissingMaterialProperty {
        material: &'static str,
        property: &'static str,
    },

    /// Malformed numeric value (e.g. "10q")
    #[error("Invalid value '{text}': expected a number with optional SI suffix (p, n, u, m, k, M, G)")]
    InvalidValue { text: String },

    // ============ I/O Errors ============
    /// Error writing results to a file
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to an output stream
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing results
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CircuitError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(param: &'static str, value: f64, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            value,
            message: message.into(),
        }
    }

    /// Create an invalid simulation parameter error
    pub fn invalid_simulation(message: impl Into<String>) -> Self {
        Self::InvalidSimulationParam {
            message: message.into(),
        }
    }

    /// Name of the offending field, if this is a parameter error.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { param, .. } => Some(param),
            _ => None,
        }
    }
}
