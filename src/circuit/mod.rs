//! Circuit description and validation.
//!
//! A circuit is one of three fixed series topologies plus a set of component
//! values. There is no netlist: the topology tag alone fixes the wiring.

mod types;
mod validate;

pub use types::*;
pub use validate::{validate_parameters, validate_time_grid, MAX_SAMPLES};
