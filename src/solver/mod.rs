//! Response engine and transfer-function analyzer.
//!
//! This module provides the numerical core of CircuitLab.
//!
//! ## Closed-form solutions
//!
//! Only three series topologies are supported, so every response has an
//! analytic solution:
//!
//! ```text
//! RC   τ = RC       v(t) = Vs(1 - e^{-t/τ})
//! RL   τ = L/R      i(t) = (Vs/R)(1 - e^{-t/τ})
//! RLC  α = R/(2L)   ω₀ = 1/√(LC)   ζ = α/ω₀
//! ```
//!
//! For RLC the damping ratio selects one of three solution families:
//!
//! - ζ > 1 + ε: overdamped, two real roots `s1,2 = -α ± √(α² - ω₀²)`
//! - ζ < 1 - ε: underdamped, ringing at `ωd = ω₀√(1 - ζ²)`
//! - otherwise: critically damped, repeated root `-α`
//!
//! The band ε keeps the overdamped and underdamped forms away from their
//! division by `√(α² - ω₀²)` or `ωd` near ζ = 1.

mod damping;
mod engine;
mod grid;
mod response;
mod transfer;

pub use damping::{critical_resistance, DampingRegime, DampingType, SecondOrder};
pub use engine::{ResponseConfig, ResponseEngine};
pub use grid::TimeGrid;
pub use response::{compute_response, try_compute_response, Characteristics, CircuitResponse, TimeSample};
pub use transfer::{compute_transfer_function, try_compute_transfer_function, TransferFunction};

/// Half-width of the ζ band around 1 treated as critical damping.
///
/// Kept at 0.01 for compatibility; it is a tuning constant, not a derived
/// threshold. [`SecondOrder::with_tolerance`] accepts other values.
pub const CRITICAL_DAMPING_TOLERANCE: f64 = 0.01;

/// Auto windows span this many characteristic times.
pub const AUTO_WINDOW_TIME_CONSTANTS: f64 = 5.0;

/// Shortest auto window (seconds).
pub const AUTO_DURATION_MIN: f64 = 1e-3;

/// Longest auto window (seconds).
pub const AUTO_DURATION_MAX: f64 = 0.1;

/// Steps per auto window.
pub const DEFAULT_AUTO_SAMPLES: usize = 1000;
