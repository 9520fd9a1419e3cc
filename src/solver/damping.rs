//! Second-order characteristics shared by the response engine and the
//! transfer-function analyzer.
//!
//! Both consumers derive α, ω₀, ζ and the damping regime from here, so a
//! given (R, L, C) always yields the same regime and the same pole pair.

use std::f64::consts::PI;
use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::CRITICAL_DAMPING_TOLERANCE;

/// Coarse damping classification reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DampingType {
    Overdamped,
    CriticallyDamped,
    Underdamped,
}

impl DampingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DampingType::Overdamped => "overdamped",
            DampingType::CriticallyDamped => "critically-damped",
            DampingType::Underdamped => "underdamped",
        }
    }
}

impl fmt::Display for DampingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Damping regime together with the data its closed form needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DampingRegime {
    /// Two distinct real roots, `s1 > s2`
    Overdamped { s1: f64, s2: f64 },
    /// Repeated real root `s = -α`
    CriticallyDamped { s: f64 },
    /// Complex pair `-α ± jωd`
    Underdamped { omega_d: f64 },
}

impl DampingRegime {
    pub fn damping_type(&self) -> DampingType {
        match self {
            DampingRegime::Overdamped { .. } => DampingType::Overdamped,
            DampingRegime::CriticallyDamped { .. } => DampingType::CriticallyDamped,
            DampingRegime::Underdamped { .. } => DampingType::Underdamped,
        }
    }
}

/// α, ω₀, ζ and regime of a series RLC circuit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecondOrder {
    /// Damping coefficient R/(2L), 1/s
    pub alpha: f64,
    /// Natural frequency 1/√(LC), rad/s
    pub omega0: f64,
    /// Damping ratio α/ω₀
    pub zeta: f64,
    pub regime: DampingRegime,
}

impl SecondOrder {
    /// Derive the characteristics of a series RLC circuit.
    pub fn from_rlc(resistance: f64, inductance: f64, capacitance: f64) -> Self {
        Self::with_tolerance(resistance, inductance, capacitance, CRITICAL_DAMPING_TOLERANCE)
    }

    /// Derive the characteristics using a custom critical-damping band.
    ///
    /// ζ inside `[1 - tolerance, 1 + tolerance]` is treated as critical.
    pub fn with_tolerance(resistance: f64, inductance: f64, capacitance: f64, tolerance: f64) -> Self {
        let alpha = resistance / (2.0 * inductance);
        let omega0 = 1.0 / (inductance * capacitance).sqrt();
        let zeta = alpha / omega0;

        let regime = if zeta > 1.0 + tolerance {
            let root = (alpha * alpha - omega0 * omega0).sqrt();
            DampingRegime::Overdamped {
                s1: -alpha + root,
                s2: -alpha - root,
            }
        } else if zeta < 1.0 - tolerance {
            DampingRegime::Underdamped {
                omega_d: omega0 * (1.0 - zeta * zeta).sqrt(),
            }
        } else {
            DampingRegime::CriticallyDamped { s: -alpha }
        };

        Self {
            alpha,
            omega0,
            zeta,
            regime,
        }
    }

    pub fn damping_type(&self) -> DampingType {
        self.regime.damping_type()
    }

    /// The two roots of `s² + 2αs + ω₀²`, ordered with the larger real part
    /// (or positive imaginary part) first.
    pub fn poles(&self) -> [Complex64; 2] {
        match self.regime {
            DampingRegime::Overdamped { s1, s2 } => {
                [Complex64::new(s1, 0.0), Complex64::new(s2, 0.0)]
            }
            DampingRegime::CriticallyDamped { s } => {
                [Complex64::new(s, 0.0), Complex64::new(s, 0.0)]
            }
            DampingRegime::Underdamped { omega_d } => [
                Complex64::new(-self.alpha, omega_d),
                Complex64::new(-self.alpha, -omega_d),
            ],
        }
    }

    /// ω₀².
    pub fn omega0_squared(&self) -> f64 {
        self.omega0 * self.omega0
    }

    /// Damped natural frequency, present only when underdamped.
    pub fn damped_frequency(&self) -> Option<f64> {
        match self.regime {
            DampingRegime::Underdamped { omega_d } => Some(omega_d),
            _ => None,
        }
    }

    /// Ringing period 2π/ωd in seconds, present only when underdamped.
    pub fn damped_period(&self) -> Option<f64> {
        self.damped_frequency().map(|omega_d| 2.0 * PI / omega_d)
    }

    /// Decay envelope time constant 1/α.
    pub fn envelope_time_constant(&self) -> f64 {
        1.0 / self.alpha
    }

    /// Quality factor Q = 1/(2ζ).
    pub fn quality_factor(&self) -> f64 {
        1.0 / (2.0 * self.zeta)
    }

    /// One-line regime description used for status text.
    pub fn describe(&self) -> String {
        format!("{} (zeta = {:.3})", self.damping_type(), self.zeta)
    }
}

/// Resistance that makes a series RLC circuit critically damped, 2√(L/C).
pub fn critical_resistance(inductance: f64, capacitance: f64) -> f64 {
    2.0 * (inductance / capacitance).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overdamped_roots() {
        let so = SecondOrder::from_rlc(200.0, 0.1, 1e-4);
        assert_relative_eq!(so.alpha, 1000.0, epsilon = 1e-9);
        assert_relative_eq!(so.omega0, 316.227_766_016_837_9, epsilon = 1e-9);
        assert_eq!(so.damping_type(), DampingType::Overdamped);

        let DampingRegime::Overdamped { s1, s2 } = so.regime else {
            panic!("expected overdamped regime");
        };
        assert!(s2 < s1 && s1 < 0.0);
        // Vieta: s1 + s2 = -2α, s1·s2 = ω₀²
        assert_relative_eq!(s1 + s2, -2.0 * so.alpha, epsilon = 1e-9);
        assert_relative_eq!(s1 * s2, so.omega0_squared(), max_relative = 1e-12);
    }

    #[test]
    fn test_tolerance_band() {
        let l = 0.1;
        let c = 1e-4;
        let r_crit = critical_resistance(l, c);
        assert_relative_eq!(r_crit, 63.245_553_203_367_59, epsilon = 1e-9);

        let at = |zeta: f64| SecondOrder::from_rlc(r_crit * zeta, l, c).damping_type();
        assert_eq!(at(1.0), DampingType::CriticallyDamped);
        assert_eq!(at(1.005), DampingType::CriticallyDamped);
        assert_eq!(at(0.995), DampingType::CriticallyDamped);
        assert_eq!(at(1.02), DampingType::Overdamped);
        assert_eq!(at(0.98), DampingType::Underdamped);
    }

    #[test]
    fn test_custom_tolerance() {
        let r = critical_resistance(0.1, 1e-4) * 1.03;
        assert_eq!(
            SecondOrder::with_tolerance(r, 0.1, 1e-4, 0.05).damping_type(),
            DampingType::CriticallyDamped
        );
        assert_eq!(SecondOrder::from_rlc(r, 0.1, 1e-4).damping_type(), DampingType::Overdamped);
    }

    #[test]
    fn test_underdamped_derived_quantities() {
        // R = 20 Ω, L = 0.1 H, C = 100 µF: α = 100, ω₀ ≈ 316.23, ζ ≈ 0.316
        let so = SecondOrder::from_rlc(20.0, 0.1, 1e-4);
        assert_eq!(so.damping_type(), DampingType::Underdamped);
        let omega_d = so.damped_frequency().unwrap();
        assert_relative_eq!(omega_d, 300.0, epsilon = 1e-9);
        assert_relative_eq!(so.damped_period().unwrap(), 2.0 * PI / 300.0, epsilon = 1e-12);
        assert_relative_eq!(so.envelope_time_constant(), 0.01, epsilon = 1e-15);
        assert_relative_eq!(so.quality_factor(), 1.0 / (2.0 * so.zeta));

        let [p1, p2] = so.poles();
        assert_relative_eq!(p1.re, -100.0, epsilon = 1e-9);
        assert_relative_eq!(p1.im, 300.0, epsilon = 1e-9);
        assert_eq!(p2, p1.conj());
    }

    #[test]
    fn test_describe() {
        let so = SecondOrder::from_rlc(20.0, 0.1, 1e-4);
        assert_eq!(so.describe(), "underdamped (zeta = 0.316)");
        assert_eq!(
            serde_json::to_string(&DampingType::CriticallyDamped).unwrap(),
            "\"critically-damped\""
        );
    }
}
