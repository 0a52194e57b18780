use std::path::PathBuf;

use aircraft_energy_calculator::config::{AircraftConfig, load_aircraft};
use aircraft_energy_calculator::export::{is_stdout, report, table, writer_for_path};
use aircraft_energy_calculator::{AircraftInputs, AircraftModel, FieldRow};
use anyhow::Context;
use clap::Parser;
use tracing::info;

#[path = "common/catalog.rs"]
mod catalog;
#[path = "common/logging.rs"]
mod logging;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluate aircraft configurations: lift/drag, cruise power, energy and hydrogen mass"
)]
struct Cli {
    /// Aircraft config: a .toml file, a YAML list, or a directory of .toml files
    #[arg(long, default_value = "data/aircraft")]
    config: PathBuf,

    /// Only evaluate the aircraft with this name (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Print only the headline figures
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Write the property table as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON report with inputs, outputs and rows (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    name: &'a str,
    model: &'a AircraftModel,
    rows: &'a [FieldRow],
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let configs = load_aircraft(&cli.config)
        .with_context(|| format!("loading aircraft from {}", cli.config.display()))?;
    let selected = select(&configs, cli.name.as_deref())?;
    // The text table would corrupt a CSV or JSON stream sharing stdout.
    let print = ![&cli.csv, &cli.json]
        .into_iter()
        .flatten()
        .any(|path| is_stdout(path));

    let mut table_rows: Vec<(String, FieldRow)> = Vec::new();
    let mut models = Vec::with_capacity(selected.len());
    for config in &selected {
        let model = AircraftModel::new(AircraftInputs::from_config(config))
            .with_context(|| format!("aircraft '{}'", config.name))?;
        info!(aircraft = %config.name, "model evaluated");

        let rows = if cli.summary {
            model.summary()
        } else {
            model.rows()
        };
        if print {
            print_table(&config.name, &rows);
        }
        table_rows.extend(rows.into_iter().map(|r| (config.name.clone(), r)));
        models.push((config.name.as_str(), model));
    }

    if let Some(path) = &cli.csv {
        let records: Vec<table::Record<'_>> = table_rows
            .iter()
            .map(|(aircraft, row)| table::Record {
                aircraft,
                key: row.key,
                label: &row.label,
                unit: &row.unit,
                value: row.value,
            })
            .collect();
        table::write(writer_for_path(path)?, &records)?;
    }

    if let Some(path) = &cli.json {
        let rows: Vec<Vec<FieldRow>> = models.iter().map(|(_, m)| m.rows()).collect();
        let reports: Vec<Report<'_>> = models
            .iter()
            .zip(&rows)
            .map(|((name, model), rows)| Report {
                name: *name,
                model,
                rows,
            })
            .collect();
        report::write(writer_for_path(path)?, &reports)?;
    }

    Ok(())
}

fn select(configs: &[AircraftConfig], name: Option<&str>) -> anyhow::Result<Vec<AircraftConfig>> {
    if configs.is_empty() {
        anyhow::bail!("aircraft catalog is empty");
    }
    match name {
        None => Ok(configs.to_vec()),
        Some(name) => configs
            .iter()
            .find(|c| catalog::name_matches(&c.name, name))
            .cloned()
            .map(|c| vec![c])
            .ok_or_else(|| anyhow::anyhow!("Aircraft '{}' not found in catalog", name)),
    }
}

fn print_table(name: &str, rows: &[FieldRow]) {
    let width = rows.iter().map(|r| r.label.chars().count()).max().unwrap_or(0);
    println!("=== {} ===", name);
    for row in rows {
        let unit = if row.unit.is_empty() {
            String::new()
        } else {
            format!(" [{}]", row.unit)
        };
        println!("{:<width$} : {:>12.2}{}", row.label, row.value, unit, width = width);
    }
    println!();
}
