//! WASM bindings for CircuitLab Core.
//!
//! This module provides JavaScript-friendly bindings for the browser UI.
//! Every call is a pure computation, so the UI can recompute on each
//! slider change.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { computeResponse, computeTransferFunction } from 'circuitlab_core';
//!
//! await init();
//!
//! const resp = computeResponse('RLC', 100, 0.1, 1e-4, 10, 1e-5, 0.01, 'step');
//! console.log(resp.dampingType, resp.zeta);
//! plot(resp.timesMs(), resp.voltages(), resp.currentsMa());
//!
//! const tf = computeTransferFunction(100, 0.1, 1e-4);
//! scatter(tf.poleReal(), tf.poleImag());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{CircuitParameters, InputType, Topology};
use crate::error::CircuitError;
use crate::output::response_to_json;
use crate::solver::{
    critical_resistance, try_compute_response, try_compute_transfer_function, CircuitResponse,
    ResponseConfig, ResponseEngine, TransferFunction,
};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

impl From<CircuitError> for JsValue {
    fn from(err: CircuitError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A computed response exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmResponse {
    response: CircuitResponse,
}

#[wasm_bindgen]
impl WasmResponse {
    /// Sample times in seconds.
    pub fn times(&self) -> Vec<f64> {
        self.response.samples.iter().map(|s| s.time).collect()
    }

    /// Sample voltages in volts.
    pub fn voltages(&self) -> Vec<f64> {
        self.response.samples.iter().map(|s| s.voltage).collect()
    }

    /// Sample currents in amperes.
    pub fn currents(&self) -> Vec<f64> {
        self.response.samples.iter().map(|s| s.current).collect()
    }

    /// Sample times in milliseconds, for chart axes.
    #[wasm_bindgen(js_name = timesMs)]
    pub fn times_ms(&self) -> Vec<f64> {
        self.response.samples.iter().map(|s| s.time * 1e3).collect()
    }

    /// Sample currents in milliamps, for chart axes.
    #[wasm_bindgen(js_name = currentsMa)]
    pub fn currents_ma(&self) -> Vec<f64> {
        self.response.samples.iter().map(|s| s.current * 1e3).collect()
    }

    #[wasm_bindgen(getter, js_name = dampingType)]
    pub fn damping_type(&self) -> Option<String> {
        self.response.damping_type().map(|d| d.as_str().to_string())
    }

    #[wasm_bindgen(getter)]
    pub fn alpha(&self) -> Option<f64> {
        self.response.alpha()
    }

    #[wasm_bindgen(getter)]
    pub fn omega0(&self) -> Option<f64> {
        self.response.omega0()
    }

    #[wasm_bindgen(getter)]
    pub fn zeta(&self) -> Option<f64> {
        self.response.zeta()
    }

    #[wasm_bindgen(getter, js_name = timeConstant)]
    pub fn time_constant(&self) -> Option<f64> {
        self.response.time_constant()
    }

    /// Ringing period in seconds (underdamped RLC only).
    #[wasm_bindgen(getter, js_name = dampedPeriod)]
    pub fn damped_period(&self) -> Option<f64> {
        self.response.second_order().and_then(|so| so.damped_period())
    }

    /// One-line status text.
    pub fn status(&self) -> String {
        self.response.status()
    }

    /// The whole response as a JSON string.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        Ok(response_to_json(&self.response)?)
    }
}

/// Compute a response with an explicit time grid.
///
/// # Arguments
/// * `topology` - "RC", "RL" or "RLC"
/// * `r`, `l`, `c` - component values in SI units
/// * `vs` - source amplitude in volts
/// * `time_step`, `duration` - sampling grid in seconds
/// * `input` - "step" or "impulse"
#[wasm_bindgen(js_name = computeResponse)]
#[allow(clippy::too_many_arguments)]
pub fn compute_response(
    topology: &str,
    r: f64,
    l: f64,
    c: f64,
    vs: f64,
    time_step: f64,
    duration: f64,
    input: &str,
) -> Result<WasmResponse, JsValue> {
    let topology: Topology = topology.parse()?;
    let input: InputType = input.parse()?;
    let params = CircuitParameters::new(r, l, c, vs);

    let response =
        try_compute_response(topology, &params, time_step, duration, input)?;
    Ok(WasmResponse { response })
}

/// Compute a response over the auto window (five time constants, 1-100 ms).
#[wasm_bindgen(js_name = computeResponseAuto)]
pub fn compute_response_auto(
    topology: &str,
    r: f64,
    l: f64,
    c: f64,
    vs: f64,
    input: &str,
) -> Result<WasmResponse, JsValue> {
    let topology: Topology = topology.parse()?;
    let input: InputType = input.parse()?;
    let params = CircuitParameters::new(r, l, c, vs);

    let engine = ResponseEngine::with_config(ResponseConfig::new().with_input(input));
    let response = engine.run(topology, &params)?;
    Ok(WasmResponse { response })
}

/// A transfer function exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmTransferFunction {
    tf: TransferFunction,
}

#[wasm_bindgen]
impl WasmTransferFunction {
    pub fn numerator(&self) -> Vec<f64> {
        self.tf.numerator_coefficients.clone()
    }

    pub fn denominator(&self) -> Vec<f64> {
        self.tf.denominator_coefficients.clone()
    }

    /// Real parts of the two poles.
    #[wasm_bindgen(js_name = poleReal)]
    pub fn pole_real(&self) -> Vec<f64> {
        self.tf.poles.iter().map(|p| p.re).collect()
    }

    /// Imaginary parts of the two poles.
    #[wasm_bindgen(js_name = poleImag)]
    pub fn pole_imag(&self) -> Vec<f64> {
        self.tf.poles.iter().map(|p| p.im).collect()
    }

    #[wasm_bindgen(getter, js_name = dampingType)]
    pub fn damping_type(&self) -> String {
        self.tf.damping_type().as_str().to_string()
    }

    /// |H(jω)| in dB.
    #[wasm_bindgen(js_name = magnitudeDb)]
    pub fn magnitude_db(&self, omega: f64) -> f64 {
        self.tf.magnitude_db(omega)
    }

    /// Phase of H(jω) in radians.
    pub fn phase(&self, omega: f64) -> f64 {
        self.tf.phase(omega)
    }
}

/// Compute the RLC transfer function and its poles.
#[wasm_bindgen(js_name = computeTransferFunction)]
pub fn compute_transfer_function(r: f64, l: f64, c: f64) -> Result<WasmTransferFunction, JsValue> {
    let tf = try_compute_transfer_function(r, l, c)?;
    Ok(WasmTransferFunction { tf })
}

/// Resistance giving critical damping, 2√(L/C).
#[wasm_bindgen(js_name = criticalResistance)]
pub fn critical_resistance_js(l: f64, c: f64) -> f64 {
    critical_resistance(l, c)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
