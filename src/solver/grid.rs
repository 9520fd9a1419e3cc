//! Uniform sampling grid.

use crate::circuit::{CircuitParameters, Topology};

use super::{AUTO_DURATION_MAX, AUTO_DURATION_MIN, AUTO_WINDOW_TIME_CONSTANTS, DEFAULT_AUTO_SAMPLES};

/// Slack added to `duration / time_step` before flooring, so an endpoint that
/// lands on the grid up to rounding (e.g. 0.3 / 0.1) is still included.
const GRID_EPSILON: f64 = 1e-9;

/// Sample times `t = i * time_step` for `i = 0..=floor(duration / time_step)`.
///
/// Times are computed from the integer index, never accumulated, so
/// `time_at(i)` is exactly `i as f64 * time_step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub time_step: f64,
    pub duration: f64,
}

impl TimeGrid {
    pub fn new(time_step: f64, duration: f64) -> Self {
        Self { time_step, duration }
    }

    /// Window covering five characteristic times, clamped to 1 ms..100 ms,
    /// split into `samples` steps.
    pub fn auto(topology: Topology, params: &CircuitParameters, samples: usize) -> Self {
        let tau = params.characteristic_time(topology);
        let window = AUTO_WINDOW_TIME_CONSTANTS * tau;
        // NaN from degenerate parameters falls back to the shortest window
        let duration = if window.is_nan() {
            AUTO_DURATION_MIN
        } else {
            window.clamp(AUTO_DURATION_MIN, AUTO_DURATION_MAX)
        };
        let steps = if samples == 0 { DEFAULT_AUTO_SAMPLES } else { samples };
        Self::new(duration / steps as f64, duration)
    }

    /// Number of samples on the grid; zero for a degenerate grid
    /// (non-positive step, negative duration, or more samples than `usize`
    /// can count).
    pub fn len(&self) -> usize {
        if !(self.time_step > 0.0) || !(self.duration >= 0.0) {
            return 0;
        }
        let last = (self.duration / self.time_step + GRID_EPSILON).floor();
        if !last.is_finite() || last >= usize::MAX as f64 {
            return 0;
        }
        last as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time of the `index`-th sample.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 * self.time_step
    }

    /// Iterate over the sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.time_at(i))
    }
}
