//! Parameter and time-grid validation.
//!
//! The closed-form solvers never check their inputs. These functions back the
//! checked entry points and fail fast naming the offending field.

use crate::error::{CircuitError, Result};

use super::{CircuitParameters, Topology};

/// Upper bound on the number of samples a checked computation will produce.
pub const MAX_SAMPLES: usize = 1_000_000;

fn require_positive(param: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CircuitError::invalid_parameter(param, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(CircuitError::invalid_parameter(param, value, "must be greater than zero"));
    }
    Ok(())
}

/// Validate circuit parameters for a topology.
///
/// Checks:
/// - R is positive and finite
/// - L is positive and finite for RL and RLC
/// - C is positive and finite for RC and RLC
/// - the source amplitude is finite
pub fn validate_parameters(topology: Topology, params: &CircuitParameters) -> Result<()> {
    require_positive("R", params.resistance)?;

    if topology.uses_inductance() {
        require_positive("L", params.inductance)?;
    }

    if topology.uses_capacitance() {
        require_positive("C", params.capacitance)?;
    }

    if !params.source_amplitude.is_finite() {
        return Err(CircuitError::invalid_parameter(
            "sourceAmplitude",
            params.source_amplitude,
            "must be finite",
        ));
    }

    Ok(())
}

/// Validate the sampling step and window.
pub fn validate_time_grid(time_step: f64, duration: f64) -> Result<()> {
    require_positive("timeStep", time_step)?;

    if !duration.is_finite() {
        return Err(CircuitError::invalid_parameter("duration", duration, "must be finite"));
    }
    if duration < 0.0 {
        return Err(CircuitError::invalid_parameter("duration", duration, "must not be negative"));
    }

    let steps = duration / time_step;
    if steps >= MAX_SAMPLES as f64 {
        return Err(CircuitError::invalid_simulation(format!(
            "time grid of {:.0} samples exceeds the limit of {}",
            steps + 1.0,
            MAX_SAMPLES
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rc_ignores_inductance() {
        let params = CircuitParameters::rc(1000.0, 100e-6, 10.0);
        assert!(validate_parameters(Topology::Rc, &params).is_ok());
        assert!(validate_parameters(Topology::Rlc, &params).is_err());
    }

    #[test]
    fn test_names_offending_field() {
        let params = CircuitParameters::new(100.0, 0.0, 1e-4, 10.0);
        let err = validate_parameters(Topology::Rl, &params).unwrap_err();
        assert_eq!(err.parameter_name(), Some("L"));

        let params = CircuitParameters::new(-1.0, 0.1, 1e-4, 10.0);
        let err = validate_parameters(Topology::Rc, &params).unwrap_err();
        assert_eq!(err.parameter_name(), Some("R"));

        let params = CircuitParameters::new(1.0, 0.1, 1e-4, f64::NAN);
        let err = validate_parameters(Topology::Rc, &params).unwrap_err();
        assert_eq!(err.parameter_name(), Some("sourceAmplitude"));
    }

    #[test]
    fn test_time_grid() {
        assert!(validate_time_grid(1e-4, 0.01).is_ok());
        assert!(validate_time_grid(1e-4, 0.0).is_ok());
        assert_eq!(
            validate_time_grid(0.0, 0.01).unwrap_err().parameter_name(),
            Some("timeStep")
        );
        assert_eq!(
            validate_time_grid(1e-4, -1.0).unwrap_err().parameter_name(),
            Some("duration")
        );
        assert!(matches!(
            validate_time_grid(1e-9, 10.0),
            Err(CircuitError::InvalidSimulationParam { .. })
        ));
    }
}
