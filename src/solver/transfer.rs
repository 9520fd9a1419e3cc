//! Transfer function of the series RLC circuit.
//!
//! Taking the capacitor voltage as output:
//!
//! ```text
//!            ω₀²
//! H(s) = ─────────────────
//!        s² + 2αs + ω₀²
//! ```
//!
//! There are no finite zeros. Pole structure follows the shared damping
//! classification, so it always agrees with the response engine.

use num_complex::Complex64;
use serde::Serialize;

use crate::circuit::{validate_parameters, CircuitParameters, Topology};
use crate::error::Result;

use super::damping::{DampingType, SecondOrder};

/// Coefficient form plus poles and zeros of `H(s)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferFunction {
    /// Numerator coefficients, descending powers of s
    pub numerator_coefficients: Vec<f64>,
    /// Denominator coefficients, descending powers of s
    pub denominator_coefficients: Vec<f64>,
    pub poles: [Complex64; 2],
    pub zeros: Vec<Complex64>,
    #[serde(skip)]
    pub characteristics: SecondOrder,
}

impl TransferFunction {
    pub fn damping_type(&self) -> DampingType {
        self.characteristics.damping_type()
    }

    /// Evaluate `H(s)` at a complex frequency.
    pub fn evaluate(&self, s: Complex64) -> Complex64 {
        let num = horner(&self.numerator_coefficients, s);
        let den = horner(&self.denominator_coefficients, s);
        num / den
    }

    /// Frequency response `H(jω)`.
    pub fn frequency_response(&self, omega: f64) -> Complex64 {
        self.evaluate(Complex64::new(0.0, omega))
    }

    /// `|H(jω)|` in decibels.
    pub fn magnitude_db(&self, omega: f64) -> f64 {
        20.0 * self.frequency_response(omega).norm().log10()
    }

    /// Phase of `H(jω)` in radians.
    pub fn phase(&self, omega: f64) -> f64 {
        self.frequency_response(omega).arg()
    }

    /// `H(0)`.
    pub fn dc_gain(&self) -> f64 {
        self.evaluate(Complex64::new(0.0, 0.0)).re
    }

    /// True when every pole lies strictly in the left half-plane.
    pub fn is_stable(&self) -> bool {
        self.poles.iter().all(|p| p.re < 0.0)
    }
}

fn horner(coefficients: &[f64], s: Complex64) -> Complex64 {
    coefficients
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * s + c)
}

/// Compute `H(s)` for a series RLC circuit without validating its inputs.
///
/// Preconditions are those of [`compute_response`](super::compute_response):
/// R, L and C must be positive.
pub fn compute_transfer_function(resistance: f64, inductance: f64, capacitance: f64) -> TransferFunction {
    let so = SecondOrder::from_rlc(resistance, inductance, capacitance);
    let w0_sq = 1.0 / (inductance * capacitance);

    TransferFunction {
        numerator_coefficients: vec![w0_sq],
        denominator_coefficients: vec![1.0, 2.0 * so.alpha, w0_sq],
        poles: so.poles(),
        zeros: Vec::new(),
        characteristics: so,
    }
}

/// Validate R, L and C, then compute `H(s)`.
pub fn try_compute_transfer_function(
    resistance: f64,
    inductance: f64,
    capacitance: f64,
) -> Result<TransferFunction> {
    let params = CircuitParameters::rlc(resistance, inductance, capacitance, 0.0);
    validate_parameters(Topology::Rlc, &params)?;
    Ok(compute_transfer_function(resistance, inductance, capacitance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_coefficients() {
        let tf = compute_transfer_function(200.0, 0.1, 1e-4);
        assert_eq!(tf.numerator_coefficients.len(), 1);
        assert_relative_eq!(tf.numerator_coefficients[0], 1e5, max_relative = 1e-12);
        assert_eq!(tf.denominator_coefficients[0], 1.0);
        assert_relative_eq!(tf.denominator_coefficients[1], 2000.0, max_relative = 1e-12);
        assert_relative_eq!(tf.denominator_coefficients[2], 1e5, max_relative = 1e-12);
        assert!(tf.zeros.is_empty());
    }

    #[test]
    fn test_poles_are_roots_of_denominator() {
        for r in [2000.0, 200.0, 63.245_553_203_367_59, 20.0, 1.0] {
            let tf = compute_transfer_function(r, 0.1, 1e-4);
            for pole in tf.poles {
                let d = horner(&tf.denominator_coefficients, pole);
                // Relative to the size of the individual terms
                let scale = pole.norm_sqr() + tf.denominator_coefficients[2];
                assert!(d.norm() / scale < 1e-2, "R = {r}: residual {}", d.norm());
            }
        }
    }

    #[test]
    fn test_complex_pair() {
        let tf = compute_transfer_function(20.0, 0.1, 1e-4);
        assert_eq!(tf.damping_type(), DampingType::Underdamped);
        assert_relative_eq!(tf.poles[0].re, -100.0, epsilon = 1e-9);
        assert_relative_eq!(tf.poles[0].im, 300.0, epsilon = 1e-9);
        assert_eq!(tf.poles[1], tf.poles[0].conj());
        assert!(tf.is_stable());
    }

    #[test]
    fn test_frequency_response() {
        let tf = compute_transfer_function(20.0, 0.1, 1e-4);
        assert_relative_eq!(tf.dc_gain(), 1.0, max_relative = 1e-12);
        assert_abs_diff_eq!(tf.magnitude_db(0.0), 0.0, epsilon = 1e-9);

        // At ω₀ the response is -j·Q
        let w0 = tf.characteristics.omega0;
        let h = tf.frequency_response(w0);
        assert_abs_diff_eq!(h.re, 0.0, epsilon = 1e-9);
        assert_relative_eq!(h.im, -tf.characteristics.quality_factor(), max_relative = 1e-9);
        assert_relative_eq!(tf.phase(w0), -std::f64::consts::FRAC_PI_2, max_relative = 1e-9);

        // Two poles roll off at 40 dB/decade
        let drop = tf.magnitude_db(1e5) - tf.magnitude_db(1e6);
        assert_relative_eq!(drop, 40.0, max_relative = 1e-3);
    }

    #[test]
    fn test_checked_variant() {
        assert!(try_compute_transfer_function(100.0, 0.1, 1e-4).is_ok());
        let err = try_compute_transfer_function(100.0, 0.1, 0.0).unwrap_err();
        assert_eq!(err.parameter_name(), Some("C"));
    }

    #[test]
    fn test_serializes_poles_as_pairs() {
        let tf = compute_transfer_function(20.0, 0.1, 1e-4);
        let json = serde_json::to_value(&tf).unwrap();
        assert!(json.get("numeratorCoefficients").is_some());
        assert_eq!(json["poles"].as_array().unwrap().len(), 2);
        assert!(json["zeros"].as_array().unwrap().is_empty());
        assert!(json.get("characteristics").is_none());
    }
}
