//! Configurable front-end over the response functions.

use crate::circuit::{CircuitParameters, InputType, Topology};
use crate::error::Result;

use super::grid::TimeGrid;
use super::response::{compute_response, try_compute_response, CircuitResponse};
use super::DEFAULT_AUTO_SAMPLES;

/// Configuration for the response engine.
#[derive(Debug, Clone)]
pub struct ResponseConfig {
    /// Source waveform.
    pub input: InputType,
    /// Explicit sampling step; derived from the window when unset.
    pub time_step: Option<f64>,
    /// Explicit window length; five characteristic times when unset.
    pub duration: Option<f64>,
    /// Number of steps used when the step is derived.
    pub auto_samples: usize,
    /// Whether inputs are validated before computing.
    pub validate: bool,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            input: InputType::Step,
            time_step: None,
            duration: None,
            auto_samples: DEFAULT_AUTO_SAMPLES,
            validate: true,
        }
    }
}

impl ResponseConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input type.
    pub fn with_input(mut self, input: InputType) -> Self {
        self.input = input;
        self
    }

    /// Set an explicit sampling step (seconds).
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = Some(time_step);
        self
    }

    /// Set an explicit window length (seconds).
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the number of steps used for a derived sampling step.
    pub fn with_auto_samples(mut self, samples: usize) -> Self {
        self.auto_samples = samples;
        self
    }

    /// Skip input validation; degenerate inputs then yield NaN samples.
    pub fn unchecked(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Resolve the sampling grid for a circuit.
    ///
    /// - both set: used as given
    /// - only the duration: step is `duration / auto_samples` (the auto step
    ///   for an empty window)
    /// - only the step: window is the auto window
    /// - neither: auto window and step
    pub fn grid_for(&self, topology: Topology, params: &CircuitParameters) -> TimeGrid {
        let steps = if self.auto_samples == 0 {
            DEFAULT_AUTO_SAMPLES
        } else {
            self.auto_samples
        };

        match (self.time_step, self.duration) {
            (Some(time_step), Some(duration)) => TimeGrid::new(time_step, duration),
            (None, Some(duration)) if duration > 0.0 => {
                TimeGrid::new(duration / steps as f64, duration)
            }
            (None, Some(duration)) => {
                let auto = TimeGrid::auto(topology, params, steps);
                TimeGrid::new(auto.time_step, duration)
            }
            (Some(time_step), None) => {
                let auto = TimeGrid::auto(topology, params, steps);
                TimeGrid::new(time_step, auto.duration)
            }
            (None, None) => TimeGrid::auto(topology, params, steps),
        }
    }
}

/// Runs response computations with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct ResponseEngine {
    config: ResponseConfig,
}

impl ResponseEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: ResponseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResponseConfig {
        &self.config
    }

    /// Compute the response of `topology` with `params`.
    pub fn run(&self, topology: Topology, params: &CircuitParameters) -> Result<CircuitResponse> {
        let grid = self.config.grid_for(topology, params);
        let input = self.config.input;

        if self.config.validate {
            try_compute_response(topology, params, grid.time_step, grid.duration, input)
        } else {
            Ok(compute_response(topology, params, grid.time_step, grid.duration, input))
        }
    }
}
