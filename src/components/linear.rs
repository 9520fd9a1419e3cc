//! Linear passive components: Resistor, Capacitor, Inductor.
//!
//! These model the physics of a single element: value from geometry, the
//! element law, stored energy and AC impedance.

use num_complex::Complex64;

use crate::error::Result;

use super::Material;

/// `R = ρ·len/A`.
pub fn resistance_from_geometry(resistivity: f64, length: f64, area: f64) -> f64 {
    resistivity * length / area
}

/// `C = ε·A/d`.
pub fn capacitance_from_geometry(permittivity: f64, area: f64, distance: f64) -> f64 {
    permittivity * area / distance
}

/// `L = μ·N²·A/len`.
pub fn inductance_from_geometry(permeability: f64, turns: f64, area: f64, length: f64) -> f64 {
    permeability * turns * turns * area / length
}

/// A resistor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistor {
    /// Ohms
    pub resistance: f64,
}

impl Resistor {
    pub fn new(resistance: f64) -> Self {
        Self { resistance }
    }

    /// A wire of `material` with the given length (m) and cross-section (m²).
    pub fn from_geometry(material: &Material, length: f64, area: f64) -> Result<Self> {
        let rho = material.require_resistivity()?;
        Ok(Self::new(resistance_from_geometry(rho, length, area)))
    }

    /// Ohm's law, V = IR.
    pub fn voltage(&self, current: f64) -> f64 {
        current * self.resistance
    }

    /// Dissipated power, P = I²R.
    pub fn power(&self, current: f64) -> f64 {
        current * current * self.resistance
    }

    /// Conductance 1/R.
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

/// A capacitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capacitor {
    /// Farads
    pub capacitance: f64,
}

impl Capacitor {
    pub fn new(capacitance: f64) -> Self {
        Self { capacitance }
    }

    /// Parallel plates of `area` (m²) separated by `distance` (m) of `material`.
    pub fn from_geometry(material: &Material, area: f64, distance: f64) -> Result<Self> {
        let eps = material.require_permittivity()?;
        Ok(Self::new(capacitance_from_geometry(eps, area, distance)))
    }

    /// i = C·dv/dt.
    pub fn current(&self, dv_dt: f64) -> f64 {
        self.capacitance * dv_dt
    }

    /// Stored energy ½CV².
    pub fn energy(&self, voltage: f64) -> f64 {
        0.5 * self.capacitance * voltage * voltage
    }

    /// Z = 1/(jωC).
    pub fn impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(1.0, 0.0) / Complex64::new(0.0, omega * self.capacitance)
    }
}

/// An inductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inductor {
    /// Henries
    pub inductance: f64,
}

impl Inductor {
    pub fn new(inductance: f64) -> Self {
        Self { inductance }
    }

    /// A solenoid of `turns` turns, cross-section `area` (m²) and `length` (m)
    /// wound on `material`.
    pub fn from_geometry(material: &Material, turns: f64, area: f64, length: f64) -> Result<Self> {
        let mu = material.require_permeability()?;
        Ok(Self::new(inductance_from_geometry(mu, turns, area, length)))
    }

    /// v = L·di/dt.
    pub fn voltage(&self, di_dt: f64) -> f64 {
        self.inductance * di_dt
    }

    /// Stored energy ½LI².
    pub fn energy(&self, current: f64) -> f64 {
        0.5 * self.inductance * current * current
    }

    /// Z = jωL.
    pub fn impedance(&self, omega: f64) -> Complex64 {
        Complex64::new(0.0, omega * self.inductance)
    }
}
