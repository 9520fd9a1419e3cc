//! CircuitLab - RC/RL/RLC response calculator
//!
//! # Usage
//!
//! ```bash
//! circuitlab response rc --r 1k --c 100u --vs 10 > rc.csv
//! circuitlab response rlc --r 20 --l 100m --c 100u --input impulse --format json
//! circuitlab poles --r 20 --l 100m --c 100u
//! circuitlab component resistor --material copper --length 1 --area 1u
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use circuitlab_core::{
    components::{find_material, Capacitor, Inductor, Resistor, MATERIALS},
    error::{CircuitError, Result},
    output, try_compute_transfer_function,
    units::{format_si, parse_value},
    CircuitParameters, InputType, ResponseConfig, ResponseEngine, Topology,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Transient response and transfer-function calculator for RC, RL and RLC circuits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Write results to a file instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample the step or impulse response of a circuit
    Response {
        /// Circuit topology
        #[arg(value_enum)]
        topology: TopologyArg,

        /// Resistance (Ω), SI suffixes allowed
        #[arg(long, value_parser = si_value)]
        r: f64,

        /// Inductance (H), required for RL and RLC
        #[arg(long, value_parser = si_value, default_value = "0")]
        l: f64,

        /// Capacitance (F), required for RC and RLC
        #[arg(long, value_parser = si_value, default_value = "0")]
        c: f64,

        /// Source amplitude (V)
        #[arg(long, value_parser = si_value, default_value = "10")]
        vs: f64,

        /// Input waveform
        #[arg(short, long, value_enum, default_value_t = InputArg::Step)]
        input: InputArg,

        /// Sampling step (s); derived from the window when omitted
        #[arg(long, value_parser = si_value)]
        time_step: Option<f64>,

        /// Window length (s); five time constants when omitted
        #[arg(long, value_parser = si_value)]
        duration: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ResponseFormat::Csv)]
        format: ResponseFormat,
    },

    /// Print the RLC transfer function and its poles
    Poles {
        #[arg(long, value_parser = si_value)]
        r: f64,

        #[arg(long, value_parser = si_value)]
        l: f64,

        #[arg(long, value_parser = si_value)]
        c: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = PolesFormat::Text)]
        format: PolesFormat,
    },

    /// Compute a component value from its construction
    Component {
        #[command(subcommand)]
        kind: ComponentCommand,
    },

    /// List the material table
    Materials,
}

#[derive(Subcommand, Debug)]
enum ComponentCommand {
    /// Wire resistor: R = ρ·len/A
    Resistor {
        #[arg(long, default_value = "copper")]
        material: String,
        /// Length (m)
        #[arg(long, value_parser = si_value)]
        length: f64,
        /// Cross-section (m²)
        #[arg(long, value_parser = si_value)]
        area: f64,
    },
    /// Parallel-plate capacitor: C = ε·A/d
    Capacitor {
        #[arg(long, default_value = "air")]
        material: String,
        /// Plate area (m²)
        #[arg(long, value_parser = si_value)]
        area: f64,
        /// Plate separation (m)
        #[arg(long, value_parser = si_value)]
        distance: f64,
    },
    /// Solenoid inductor: L = μ·N²·A/len
    Inductor {
        #[arg(long, default_value = "air")]
        material: String,
        /// Number of turns
        #[arg(long)]
        turns: f64,
        /// Cross-section (m²)
        #[arg(long, value_parser = si_value)]
        area: f64,
        /// Coil length (m)
        #[arg(long, value_parser = si_value)]
        length: f64,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TopologyArg {
    Rc,
    Rl,
    Rlc,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Rc => Topology::Rc,
            TopologyArg::Rl => Topology::Rl,
            TopologyArg::Rlc => Topology::Rlc,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum InputArg {
    Step,
    Impulse,
}

impl From<InputArg> for InputType {
    fn from(arg: InputArg) -> Self {
        match arg {
            InputArg::Step => InputType::Step,
            InputArg::Impulse => InputType::Impulse,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ResponseFormat {
    /// time, voltage, current in SI units
    Csv,
    /// time in ms, voltage, current in mA
    Chart,
    /// samples plus characteristics
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolesFormat {
    Text,
    Json,
}

fn si_value(text: &str) -> std::result::Result<f64, String> {
    parse_value(text).map_err(|e| e.to_string())
}

fn open_output(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| CircuitError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut out = open_output(args.output.as_ref())?;

    match args.command {
        Command::Response {
            topology,
            r,
            l,
            c,
            vs,
            input,
            time_step,
            duration,
            format,
        } => {
            let topology = Topology::from(topology);
            let params = CircuitParameters::new(r, l, c, vs);

            let mut config = ResponseConfig::new().with_input(input.into());
            if let Some(dt) = time_step {
                config = config.with_time_step(dt);
            }
            if let Some(d) = duration {
                config = config.with_duration(d);
            }

            let response = ResponseEngine::with_config(config).run(topology, &params)?;
            tracing::info!(
                %topology,
                samples = response.samples.len(),
                status = %response.status(),
                "computed response"
            );

            match format {
                ResponseFormat::Csv => output::write_response_csv(&response, &mut out)?,
                ResponseFormat::Chart => output::write_chart_csv(&response, &mut out)?,
                ResponseFormat::Json => output::write_response_json(&response, &mut out)?,
            }
        }

        Command::Poles { r, l, c, format } => {
            let tf = try_compute_transfer_function(r, l, c)?;
            match format {
                PolesFormat::Text => output::write_transfer_text(&tf, &mut out)?,
                PolesFormat::Json => output::write_transfer_json(&tf, &mut out)?,
            }
        }

        Command::Component { kind } => match kind {
            ComponentCommand::Resistor {
                material,
                length,
                area,
            } => {
                let r = Resistor::from_geometry(find_material(&material)?, length, area)?;
                writeln!(out, "R = {}", format_si(r.resistance, "Ω"))?;
            }
            ComponentCommand::Capacitor {
                material,
                area,
                distance,
            } => {
                let c = Capacitor::from_geometry(find_material(&material)?, area, distance)?;
                writeln!(out, "C = {}", format_si(c.capacitance, "F"))?;
            }
            ComponentCommand::Inductor {
                material,
                turns,
                area,
                length,
            } => {
                let l = Inductor::from_geometry(find_material(&material)?, turns, area, length)?;
                writeln!(out, "L = {}", format_si(l.inductance, "H"))?;
            }
        },

        Command::Materials => {
            writeln!(out, "material,resistivity,permittivity,permeability")?;
            let cell = |v: Option<f64>| v.map(|x| format!("{:e}", x)).unwrap_or_default();
            for m in &MATERIALS {
                writeln!(
                    out,
                    "{},{},{},{}",
                    m.name,
                    cell(m.resistivity),
                    cell(m.permittivity),
                    cell(m.permeability)
                )?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
