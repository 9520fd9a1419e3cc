//! Result formatting for charts, CSV and JSON.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::solver::{CircuitResponse, DampingType, TimeSample, TransferFunction};

/// A sample rescaled for plotting: milliseconds and milliamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub time_ms: f64,
    pub voltage: f64,
    pub current_ma: f64,
}

impl From<&TimeSample> for ChartPoint {
    fn from(s: &TimeSample) -> Self {
        Self {
            time_ms: s.time * 1e3,
            voltage: s.voltage,
            current_ma: s.current * 1e3,
        }
    }
}

/// Rescale a response for plotting.
pub fn chart_series(response: &CircuitResponse) -> Vec<ChartPoint> {
    response.samples.iter().map(ChartPoint::from).collect()
}

/// Flat view of a response's scalar characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damping_type: Option<DampingType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omega0: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_constant: Option<f64>,
}

impl From<&CircuitResponse> for ResponseSummary {
    fn from(r: &CircuitResponse) -> Self {
        Self {
            damping_type: r.damping_type(),
            alpha: r.alpha(),
            omega0: r.omega0(),
            zeta: r.zeta(),
            time_constant: r.time_constant(),
        }
    }
}

#[derive(Serialize)]
struct ResponseDocument<'a> {
    samples: &'a [TimeSample],
    #[serde(flatten)]
    summary: ResponseSummary,
}

/// Serialize a response as a JSON object with a `samples` array and the
/// characteristics that apply to its topology.
pub fn response_to_json(response: &CircuitResponse) -> Result<String> {
    let doc = ResponseDocument {
        samples: &response.samples,
        summary: ResponseSummary::from(response),
    };
    Ok(serde_json::to_string(&doc)?)
}

/// Write a response as JSON.
pub fn write_response_json<W: Write>(response: &CircuitResponse, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", response_to_json(response)?)?;
    Ok(())
}

/// Write response samples as CSV in SI units.
///
/// Format:
/// ```csv
/// time,voltage,current
/// 0,0,0.01
/// 0.001,0.0995,0.00990
/// ```
pub fn write_response_csv<W: Write>(response: &CircuitResponse, writer: &mut W) -> Result<()> {
    writeln!(writer, "time,voltage,current")?;
    for s in &response.samples {
        writeln!(writer, "{},{},{}", s.time, s.voltage, s.current)?;
    }
    Ok(())
}

/// Write response samples as CSV in chart units.
///
/// Format:
/// ```csv
/// time_ms,voltage,current_ma
/// 0,0,10
/// ```
pub fn write_chart_csv<W: Write>(response: &CircuitResponse, writer: &mut W) -> Result<()> {
    writeln!(writer, "time_ms,voltage,current_ma")?;
    for p in chart_series(response) {
        writeln!(writer, "{},{},{}", p.time_ms, p.voltage, p.current_ma)?;
    }
    Ok(())
}

/// Write a transfer function as JSON.
pub fn write_transfer_json<W: Write>(tf: &TransferFunction, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string(tf)?)?;
    Ok(())
}

/// Write a human-readable transfer function report.
pub fn write_transfer_text<W: Write>(tf: &TransferFunction, writer: &mut W) -> Result<()> {
    let so = &tf.characteristics;
    let w0_sq = so.omega0_squared();

    writeln!(
        writer,
        "H(s) = {:.6e} / (s^2 + {:.6e} s + {:.6e})",
        w0_sq,
        2.0 * so.alpha,
        w0_sq
    )?;
    writeln!(writer, "alpha  = {:.6} 1/s", so.alpha)?;
    writeln!(writer, "omega0 = {:.6} rad/s", so.omega0)?;
    writeln!(writer, "zeta   = {:.6}", so.zeta)?;
    writeln!(writer, "regime = {}", so.damping_type())?;
    if let Some(period) = so.damped_period() {
        writeln!(writer, "damped period = {:.6} s", period)?;
    }
    for (i, p) in tf.poles.iter().enumerate() {
        writeln!(writer, "pole {} = {:.6} {:+.6}j", i + 1, p.re, p.im)?;
    }
    writeln!(writer, "zeros: none")?;
    Ok(())
}
