use std::path::PathBuf;

use aircraft_energy_calculator::config::{SweepConfig, load_sweeps};
use aircraft_energy_calculator::export::{series as export_series, writer_for_path};
use aircraft_energy_calculator::sweep::{SweepRequest, run_sweep};
use anyhow::Context;
use clap::Parser;

#[path = "common/catalog.rs"]
mod catalog;
#[path = "common/logging.rs"]
mod logging;

/// Sweep one input across a range and record a derived metric, one curve per series value.
#[derive(Parser, Debug)]
#[command(author, version, about = "Parameter sweep CSV generator")]
struct Cli {
    /// Sweep definition: a .toml file, a YAML list, or a directory of .toml files
    #[arg(long)]
    config: PathBuf,

    /// Sweep to run when the config holds several (defaults to the first)
    #[arg(long)]
    name: Option<String>,

    /// Output CSV path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let sweeps = load_sweeps(&cli.config)
        .with_context(|| format!("loading sweeps from {}", cli.config.display()))?;
    let sweep = find_sweep(&sweeps, cli.name.as_deref())?;
    let request = SweepRequest::from_config(sweep)?;
    let series = run_sweep(&request)?;

    let curves: Vec<export_series::Curve<'_>> = series
        .iter()
        .map(|s| export_series::Curve {
            label: &s.label,
            points: &s.points,
        })
        .collect();
    let rows = export_series::write(writer_for_path(&cli.output)?, &curves)?;

    let skipped: usize = series.iter().map(|s| s.skipped).sum();
    eprintln!(
        "sweep '{}': {} series, {} rows written, {} points skipped",
        sweep.name,
        series.len(),
        rows,
        skipped
    );
    Ok(())
}

fn find_sweep<'a>(sweeps: &'a [SweepConfig], name: Option<&str>) -> anyhow::Result<&'a SweepConfig> {
    match name {
        None => sweeps
            .first()
            .ok_or_else(|| anyhow::anyhow!("sweep catalog is empty")),
        Some(name) => sweeps
            .iter()
            .find(|s| catalog::name_matches(&s.name, name))
            .ok_or_else(|| anyhow::anyhow!("Sweep '{}' not found", name)),
    }
}
