use std::path::PathBuf;

use aircraft_energy_calculator::aerodynamics::polar::{
    DEFAULT_CL_RANGE, DEFAULT_POLAR_POINTS, sample_polar,
};
use aircraft_energy_calculator::config::load_aircraft;
use aircraft_energy_calculator::export::{series as export_series, writer_for_path};
use aircraft_energy_calculator::{AircraftInputs, AircraftModel};
use anyhow::Context;
use clap::Parser;

#[path = "common/logging.rs"]
mod logging;

/// Trace the parabolic drag polar (cD on x, cL on y) of each configured aircraft.
#[derive(Parser, Debug)]
#[command(author, version, about = "Drag polar CSV generator")]
struct Cli {
    #[arg(long, default_value = "data/aircraft")]
    config: PathBuf,

    #[arg(long, default_value_t = DEFAULT_CL_RANGE.0, allow_negative_numbers = true)]
    cl_min: f64,

    #[arg(long, default_value_t = DEFAULT_CL_RANGE.1, allow_negative_numbers = true)]
    cl_max: f64,

    #[arg(long, default_value_t = DEFAULT_POLAR_POINTS)]
    points: usize,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let configs = load_aircraft(&cli.config)
        .with_context(|| format!("loading aircraft from {}", cli.config.display()))?;

    let mut curves = Vec::with_capacity(configs.len());
    for config in &configs {
        let geometry = AircraftModel::new(AircraftInputs::from_config(config))
            .with_context(|| format!("aircraft '{}'", config.name))?
            .polar_geometry();
        let points: Vec<(f64, f64)> = sample_polar(&geometry, cli.cl_min, cli.cl_max, cli.points)
            .with_context(|| format!("aircraft '{}'", config.name))?
            .into_iter()
            .map(|p| (p.cd, p.cl))
            .collect();
        curves.push((config.name.as_str(), points));
    }

    let curves: Vec<export_series::Curve<'_>> = curves
        .iter()
        .map(|(label, points)| export_series::Curve { label, points })
        .collect();
    export_series::write(writer_for_path(&cli.output)?, &curves)?;
    Ok(())
}
