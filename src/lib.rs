//! # CircuitLab Core
//!
//! Closed-form transient response and transfer-function engine for series
//! RC, RL and RLC circuits.
//!
//! This library provides:
//! - Step and impulse responses sampled on a uniform time grid
//! - Damping classification, α, ω₀, ζ and time constants
//! - The RLC transfer function, its poles and frequency response
//! - Component physics (values from geometry, energy, impedance)
//!
//! ## Architecture
//!
//! - [`circuit`] - Topologies, parameters and input validation
//! - [`solver`] - Response engine and transfer-function analyzer
//! - [`components`] - Passive element physics and material table
//! - [`units`] - SI-prefixed value parsing and formatting
//! - [`output`] - Chart scaling, CSV and JSON output
//!
//! ## Usage
//!
//! ```
//! use circuitlab_core::{compute_response, CircuitParameters, InputType, Topology};
//!
//! let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
//! let response = compute_response(Topology::Rc, &params, 1e-3, 0.5, InputType::Step);
//! assert_eq!(response.time_constant(), Some(0.1));
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! circuitlab response rlc --r 20 --l 100m --c 100u --vs 10 --format json
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { computeResponse } from 'circuitlab_core';
//!
//! const resp = computeResponse('RLC', 100, 0.1, 1e-4, 10, 1e-5, 0.01, 'step');
//! chart.setData(resp.timesMs(), resp.voltages(), resp.currentsMa());
//! ```

pub mod circuit;
pub mod components;
pub mod error;
pub mod output;
pub mod solver;
pub mod units;

// Re-export main types for convenience
pub use circuit::{CircuitParameters, InputType, Topology};
pub use error::{CircuitError, Result};
pub use solver::{
    compute_response, compute_transfer_function, try_compute_response,
    try_compute_transfer_function, CircuitResponse, DampingType, ResponseConfig, ResponseEngine,
    TimeSample, TransferFunction,
};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::{WasmResponse, WasmTransferFunction};
