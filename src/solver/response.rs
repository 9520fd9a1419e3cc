//! Closed-form time-domain responses.
//!
//! Each topology and input type has an analytic solution; the engine picks
//! the solution (and, for RLC, the damping regime) once and evaluates it on
//! every grid point.
//!
//! ## Conventions
//!
//! - RC: `voltage` is the capacitor voltage, `current` the loop current.
//! - RL: `voltage` is the inductor voltage, `current` the loop current.
//! - RLC: `voltage` is the capacitor voltage, `current = C·dv/dt`.
//!
//! Impulse responses are the time derivatives of the step responses, i.e.
//! the response to a unit-area impulse scaled by the source amplitude.

use serde::Serialize;

use crate::circuit::{validate_parameters, validate_time_grid, CircuitParameters, InputType, Topology};
use crate::error::Result;

use super::damping::{DampingRegime, DampingType, SecondOrder};
use super::grid::TimeGrid;

/// One point of a response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSample {
    /// Seconds since the input was applied
    pub time: f64,
    /// Volts
    pub voltage: f64,
    /// Amperes
    pub current: f64,
}

/// Topology-specific scalar characteristics of a response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Characteristics {
    /// RC or RL: single exponential with time constant τ
    FirstOrder { time_constant: f64 },
    /// RLC: α, ω₀, ζ and damping regime
    SecondOrder(SecondOrder),
}

/// Samples plus characteristics, fully determined by the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitResponse {
    pub samples: Vec<TimeSample>,
    pub characteristics: Characteristics,
}

impl CircuitResponse {
    /// Damping regime (RLC only).
    pub fn damping_type(&self) -> Option<DampingType> {
        self.second_order().map(SecondOrder::damping_type)
    }

    /// Damping coefficient α in 1/s (RLC only).
    pub fn alpha(&self) -> Option<f64> {
        self.second_order().map(|so| so.alpha)
    }

    /// Natural frequency ω₀ in rad/s (RLC only).
    pub fn omega0(&self) -> Option<f64> {
        self.second_order().map(|so| so.omega0)
    }

    /// Damping ratio ζ (RLC only).
    pub fn zeta(&self) -> Option<f64> {
        self.second_order().map(|so| so.zeta)
    }

    /// Time constant τ in seconds (RC and RL only).
    pub fn time_constant(&self) -> Option<f64> {
        match self.characteristics {
            Characteristics::FirstOrder { time_constant } => Some(time_constant),
            Characteristics::SecondOrder(_) => None,
        }
    }

    pub fn second_order(&self) -> Option<&SecondOrder> {
        match &self.characteristics {
            Characteristics::SecondOrder(so) => Some(so),
            Characteristics::FirstOrder { .. } => None,
        }
    }

    /// Sample whose time is closest to `time`.
    pub fn sample_near(&self, time: f64) -> Option<&TimeSample> {
        self.samples.iter().min_by(|a, b| {
            (a.time - time).abs().total_cmp(&(b.time - time).abs())
        })
    }

    /// Short status line for display.
    pub fn status(&self) -> String {
        match &self.characteristics {
            Characteristics::FirstOrder { time_constant } => {
                format!("first-order (tau = {:.6} s)", time_constant)
            }
            Characteristics::SecondOrder(so) => so.describe(),
        }
    }
}

/// Compute the response of a circuit without validating its inputs.
///
/// # Preconditions
/// `time_step > 0`, `duration >= 0`, `R > 0`, `L > 0` for RL/RLC and `C > 0`
/// for RC/RLC. Violating them yields NaN or infinite samples rather than an
/// error; a non-positive step or negative duration yields no samples.
/// Use [`try_compute_response`] for a checked variant.
pub fn compute_response(
    topology: Topology,
    params: &CircuitParameters,
    time_step: f64,
    duration: f64,
    input: InputType,
) -> CircuitResponse {
    let grid = TimeGrid::new(time_step, duration);
    let _span = tracing::debug_span!(
        "compute_response",
        %topology,
        %input,
        samples = grid.len()
    )
    .entered();

    match topology {
        Topology::Rc => rc_response(params, &grid, input),
        Topology::Rl => rl_response(params, &grid, input),
        Topology::Rlc => rlc_response(params, &grid, input),
    }
}

/// Validate the inputs, then compute the response.
pub fn try_compute_response(
    topology: Topology,
    params: &CircuitParameters,
    time_step: f64,
    duration: f64,
    input: InputType,
) -> Result<CircuitResponse> {
    validate_parameters(topology, params)?;
    validate_time_grid(time_step, duration)?;
    Ok(compute_response(topology, params, time_step, duration, input))
}

fn sample(grid: &TimeGrid, f: impl Fn(f64) -> (f64, f64)) -> Vec<TimeSample> {
    grid.times()
        .map(|time| {
            let (voltage, current) = f(time);
            TimeSample {
                time,
                voltage,
                current,
            }
        })
        .collect()
}

fn rc_response(params: &CircuitParameters, grid: &TimeGrid, input: InputType) -> CircuitResponse {
    let r = params.resistance;
    let vs = params.source_amplitude;
    let tau = r * params.capacitance;

    let samples = match input {
        InputType::Step => sample(grid, |t| {
            let decay = (-t / tau).exp();
            (vs * (1.0 - decay), (vs / r) * decay)
        }),
        InputType::Impulse => sample(grid, |t| {
            let decay = (-t / tau).exp();
            ((vs / tau) * decay, -(vs / (r * tau)) * decay)
        }),
    };

    CircuitResponse {
        samples,
        characteristics: Characteristics::FirstOrder { time_constant: tau },
    }
}

fn rl_response(params: &CircuitParameters, grid: &TimeGrid, input: InputType) -> CircuitResponse {
    let r = params.resistance;
    let l = params.inductance;
    let vs = params.source_amplitude;
    let tau = l / r;

    let samples = match input {
        InputType::Step => sample(grid, |t| {
            let decay = (-t / tau).exp();
            (vs * decay, (vs / r) * (1.0 - decay))
        }),
        InputType::Impulse => sample(grid, |t| {
            let decay = (-t / tau).exp();
            (-(vs * r / l) * decay, (vs / l) * decay)
        }),
    };

    CircuitResponse {
        samples,
        characteristics: Characteristics::FirstOrder { time_constant: tau },
    }
}

fn rlc_response(params: &CircuitParameters, grid: &TimeGrid, input: InputType) -> CircuitResponse {
    let l = params.inductance;
    let c = params.capacitance;
    let vs = params.source_amplitude;

    let so = SecondOrder::from_rlc(params.resistance, l, c);
    let alpha = so.alpha;
    let w0_sq = so.omega0_squared();

    tracing::debug!(
        alpha = so.alpha,
        omega0 = so.omega0,
        zeta = so.zeta,
        regime = %so.damping_type(),
        "classified RLC damping"
    );

    let samples = match (so.regime, input) {
        (DampingRegime::Overdamped { s1, s2 }, InputType::Step) => {
            // A1·e^{s1t} + A2·e^{s2t} is the voltage still to be gained,
            // starting at Vs and decaying to zero.
            let a1 = vs * s2 / (s2 - s1);
            let a2 = -vs * s1 / (s2 - s1);
            sample(grid, |t| {
                let e1 = (s1 * t).exp();
                let e2 = (s2 * t).exp();
                let v = vs - (a1 * e1 + a2 * e2);
                let i = -c * (a1 * s1 * e1 + a2 * s2 * e2);
                (v, i)
            })
        }
        (DampingRegime::Overdamped { s1, s2 }, InputType::Impulse) => {
            let k = vs * w0_sq / (s1 - s2);
            sample(grid, |t| {
                let e1 = (s1 * t).exp();
                let e2 = (s2 * t).exp();
                (k * (e1 - e2), c * k * (s1 * e1 - s2 * e2))
            })
        }
        (DampingRegime::CriticallyDamped { .. }, InputType::Step) => sample(grid, |t| {
            let decay = (-alpha * t).exp();
            (vs * (1.0 - decay * (1.0 + alpha * t)), (vs / l) * t * decay)
        }),
        (DampingRegime::CriticallyDamped { .. }, InputType::Impulse) => sample(grid, |t| {
            let decay = (-alpha * t).exp();
            (vs * w0_sq * t * decay, c * vs * w0_sq * (1.0 - alpha * t) * decay)
        }),
        (DampingRegime::Underdamped { omega_d }, InputType::Step) => sample(grid, |t| {
            let decay = (-alpha * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let v = vs * (1.0 - decay * (cos + (alpha / omega_d) * sin));
            let i = vs * w0_sq * c * decay * sin / omega_d;
            (v, i)
        }),
        (DampingRegime::Underdamped { omega_d }, InputType::Impulse) => {
            let k = vs * w0_sq / omega_d;
            sample(grid, |t| {
                let decay = (-alpha * t).exp();
                let (sin, cos) = (omega_d * t).sin_cos();
                (k * decay * sin, c * k * decay * (omega_d * cos - alpha * sin))
            })
        }
    };

    CircuitResponse {
        samples,
        characteristics: Characteristics::SecondOrder(so),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_rc_step_initial_and_final() {
        let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
        let resp = compute_response(Topology::Rc, &params, 1e-3, 1.5, InputType::Step);

        let first = resp.samples[0];
        assert_eq!(first.time, 0.0);
        assert_eq!(first.voltage, 0.0);
        assert_relative_eq!(first.current, 0.01);

        let last = resp.samples.last().unwrap();
        assert_abs_diff_eq!(last.voltage, 10.0, epsilon = 1e-5);
        assert_abs_diff_eq!(last.current, 0.0, epsilon = 1e-8);
        assert_eq!(resp.time_constant(), Some(0.1));
        assert_eq!(resp.damping_type(), None);
    }

    #[test]
    fn test_rc_impulse() {
        let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
        let resp = compute_response(Topology::Rc, &params, 1e-3, 0.1, InputType::Impulse);
        let first = resp.samples[0];
        assert_relative_eq!(first.voltage, 100.0, max_relative = 1e-12);
        assert_relative_eq!(first.current, -0.1, max_relative = 1e-12);

        let at_tau = resp.sample_near(0.1).unwrap();
        assert_relative_eq!(at_tau.voltage, 100.0 * (-1.0f64).exp(), max_relative = 1e-9);
    }

    #[test]
    fn test_rl_step_and_impulse() {
        let params = CircuitParameters::rl(100.0, 0.1, 10.0);
        let step = compute_response(Topology::Rl, &params, 1e-5, 0.02, InputType::Step);
        assert_eq!(step.samples[0].current, 0.0);
        assert_relative_eq!(step.samples[0].voltage, 10.0);
        let last = step.samples.last().unwrap();
        assert_abs_diff_eq!(last.current, 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(last.voltage, 0.0, epsilon = 1e-6);

        let imp = compute_response(Topology::Rl, &params, 1e-5, 0.02, InputType::Impulse);
        assert_relative_eq!(imp.samples[0].current, 100.0, max_relative = 1e-12);
        assert_relative_eq!(imp.samples[0].voltage, -10_000.0, max_relative = 1e-12);
        assert_eq!(imp.time_constant(), step.time_constant());
    }

    #[test]
    fn test_rlc_step_starts_at_rest() {
        // One circuit per regime; all start from an uncharged capacitor
        for r in [2000.0, 63.245_553_203_367_59, 20.0] {
            let params = CircuitParameters::rlc(r, 0.1, 1e-4, 10.0);
            let resp = compute_response(Topology::Rlc, &params, 1e-4, 0.5, InputType::Step);
            let first = resp.samples[0];
            assert_abs_diff_eq!(first.voltage, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(first.current, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rlc_step_settles_to_source() {
        for r in [2000.0, 63.245_553_203_367_59, 20.0] {
            let params = CircuitParameters::rlc(r, 0.1, 1e-4, 10.0);
            let resp = compute_response(Topology::Rlc, &params, 1e-3, 30.0, InputType::Step);
            let last = resp.samples.last().unwrap();
            assert_abs_diff_eq!(last.voltage, 10.0, epsilon = 1e-3);
            assert_abs_diff_eq!(last.current, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_underdamped_overshoots() {
        let params = CircuitParameters::rlc(20.0, 0.1, 1e-4, 10.0);
        let resp = compute_response(Topology::Rlc, &params, 1e-5, 0.05, InputType::Step);
        assert_eq!(resp.damping_type(), Some(DampingType::Underdamped));

        let peak = resp.samples.iter().map(|s| s.voltage).fold(f64::MIN, f64::max);
        // Overshoot e^{-ζπ/√(1-ζ²)} ≈ 35% for ζ ≈ 0.316
        let expected = 10.0 * (1.0 + (-100.0 * std::f64::consts::PI / 300.0).exp());
        assert_relative_eq!(peak, expected, max_relative = 1e-4);
    }

    #[test]
    fn test_rlc_impulse_initial_values() {
        // Underdamped impulse: v(0) = 0, i(0) = C·Vs·ω₀²
        let params = CircuitParameters::rlc(20.0, 0.1, 1e-4, 10.0);
        let resp = compute_response(Topology::Rlc, &params, 1e-5, 0.01, InputType::Impulse);
        assert_abs_diff_eq!(resp.samples[0].voltage, 0.0, epsilon = 1e-12);
        assert_relative_eq!(resp.samples[0].current, 1e-4 * 10.0 * 1e5, max_relative = 1e-9);

        // Overdamped impulse has the same initial current
        let params = params.with_resistance(2000.0);
        let resp = compute_response(Topology::Rlc, &params, 1e-5, 0.01, InputType::Impulse);
        assert_abs_diff_eq!(resp.samples[0].voltage, 0.0, epsilon = 1e-12);
        assert_relative_eq!(resp.samples[0].current, 100.0, max_relative = 1e-9);
    }

    #[test]
    fn test_rlc_reports_characteristics() {
        let params = CircuitParameters::rlc(2000.0, 0.1, 1e-4, 10.0);
        let resp = compute_response(Topology::Rlc, &params, 1e-5, 0.001, InputType::Step);
        assert_eq!(resp.damping_type(), Some(DampingType::Overdamped));
        assert_relative_eq!(resp.alpha().unwrap(), 10_000.0, epsilon = 1e-9);
        assert_relative_eq!(resp.omega0().unwrap(), 316.227_766_016_837_9, epsilon = 1e-9);
        assert_relative_eq!(resp.zeta().unwrap(), 31.622_776_601_683_79, epsilon = 1e-9);
        assert_eq!(resp.time_constant(), None);
        assert_eq!(resp.status(), "overdamped (zeta = 31.623)");
    }

    #[test]
    fn test_unchecked_degenerate_inputs() {
        let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
        assert!(compute_response(Topology::Rc, &params, 0.0, 1.0, InputType::Step)
            .samples
            .is_empty());
        assert!(compute_response(Topology::Rc, &params, 1e-3, -1.0, InputType::Step)
            .samples
            .is_empty());

        // L = 0 for RL propagates non-finite values instead of failing
        let params = CircuitParameters::rl(100.0, 0.0, 10.0);
        let resp = compute_response(Topology::Rl, &params, 1e-3, 0.01, InputType::Impulse);
        assert!(resp.samples.iter().any(|s| !s.current.is_finite()));
    }

    #[test]
    fn test_checked_rejects_bad_inputs() {
        let params = CircuitParameters::rl(100.0, 0.0, 10.0);
        let err = try_compute_response(Topology::Rl, &params, 1e-3, 0.01, InputType::Step)
            .unwrap_err();
        assert_eq!(err.parameter_name(), Some("L"));

        let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
        let err = try_compute_response(Topology::Rc, &params, -1e-3, 0.01, InputType::Step)
            .unwrap_err();
        assert_eq!(err.parameter_name(), Some("timeStep"));

        assert!(try_compute_response(Topology::Rc, &params, 1e-3, 0.01, InputType::Step).is_ok());
    }

    #[test]
    fn test_deterministic() {
        let params = CircuitParameters::rlc(20.0, 0.1, 1e-4, 10.0);
        let a = compute_response(Topology::Rlc, &params, 1e-4, 0.05, InputType::Impulse);
        let b = compute_response(Topology::Rlc, &params, 1e-4, 0.05, InputType::Impulse);
        assert_eq!(a, b);
    }
}
