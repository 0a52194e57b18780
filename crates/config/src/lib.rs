//! Configuration models and loaders for the Aircraft Energy Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Aircraft design inputs parsed from catalogs.
///
/// Missing fields fall back to the reference single-engine hydrogen conversion
/// (1980 kg MTOW, 16.3 m² wing).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AircraftConfig {
    pub name: String,
    pub weight_kg: f64,
    pub wing_area_m2: f64,
    pub wing_span_m: f64,
    pub cruise_speed_kmh: f64,
    pub climb_speed_kmh: f64,
    pub cruise_range_m: f64,
    pub cruise_height_m: f64,
    pub oswald_efficiency: f64,
    pub zero_lift_drag_coeff: f64,
    pub total_propulsion_efficiency: f64,
    pub atmosphere: AtmosphereConfig,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "baseline".to_string(),
            weight_kg: 1980.0,
            wing_area_m2: 16.3,
            wing_span_m: 13.1,
            cruise_speed_kmh: 250.0,
            climb_speed_kmh: 80.0,
            cruise_range_m: 370_000.0,
            cruise_height_m: 0.0,
            oswald_efficiency: 0.8,
            zero_lift_drag_coeff: 0.03,
            total_propulsion_efficiency: 0.3695,
            atmosphere: AtmosphereConfig::default(),
        }
    }
}

/// Air density per flight phase.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct AtmosphereConfig {
    pub climb_density_kg_m3: f64,
    pub cruise_density_kg_m3: f64,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            climb_density_kg_m3: 1.225,
            cruise_density_kg_m3: 1.225,
        }
    }
}

/// Input that a sweep may vary.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameterConfig {
    CruiseSpeed,
    CruiseRange,
    TotalPropulsionEfficiency,
    Weight,
    ZeroLiftDragCoeff,
}

/// Derived output a sweep reports.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricConfig {
    CruisePower,
    CruiseEnergy,
    HydrogenMass,
    LiftToDragCruise,
}

/// Evenly spaced axis `points` values from `start` to `stop` inclusive.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub parameter: SweepParameterConfig,
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

/// One family of curves: a second parameter fixed at each listed value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeriesConfig {
    pub parameter: SweepParameterConfig,
    pub values: Vec<f64>,
}

/// Sweep definition parsed from scenario files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    pub name: String,
    pub axis: AxisConfig,
    pub metric: MetricConfig,
    #[serde(default)]
    pub series: Option<SeriesConfig>,
    #[serde(default)]
    pub aircraft: AircraftConfig,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load aircraft configurations from a TOML file, a YAML list, or a directory of TOML files.
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Load sweep definitions from a TOML file, a YAML list, or a directory of TOML files.
pub fn load_sweeps<P: AsRef<Path>>(path: P) -> Result<Vec<SweepConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}
