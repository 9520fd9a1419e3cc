//! Component physics.
//!
//! This module relates the three passive elements to their construction and
//! element laws:
//! - Resistor: `R = ρ·len/A`, `V = IR`, `P = I²R`
//! - Capacitor: `C = ε·A/d`, `i = C·dv/dt`, `W = ½CV²`, `Z = 1/(jωC)`
//! - Inductor: `L = μ·N²·A/len`, `v = L·di/dt`, `W = ½LI²`, `Z = jωL`
//!
//! Values computed here feed [`CircuitParameters`](crate::circuit::CircuitParameters).

mod linear;
mod materials;

pub use linear::{
    capacitance_from_geometry, inductance_from_geometry, resistance_from_geometry, Capacitor,
    Inductor, Resistor,
};
pub use materials::{find_material, Material, MATERIALS};
