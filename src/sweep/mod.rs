//! Parameter sweeps built from repeated, independent model constructions.
//!
//! Every point is its own `AircraftModel`; points are evaluated in parallel
//! and never share state. Points whose inputs are rejected are skipped and
//! counted, never replaced by placeholder values.

use aero_config::{MetricConfig, SweepConfig, SweepParameterConfig};
use aero_performance::{AircraftInputs, AircraftModel, InvalidInputError};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

/// Input varied along an axis or across series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepParameter {
    CruiseSpeed,
    CruiseRange,
    TotalPropulsionEfficiency,
    Weight,
    ZeroLiftDragCoeff,
}

impl SweepParameter {
    pub fn key(&self) -> &'static str {
        match self {
            Self::CruiseSpeed => "cruise_speed",
            Self::CruiseRange => "cruise_range",
            Self::TotalPropulsionEfficiency => "total_propulsion_efficiency",
            Self::Weight => "weight",
            Self::ZeroLiftDragCoeff => "zero_lift_drag_coeff",
        }
    }

    /// Replace this parameter's value in `inputs`.
    pub fn apply(&self, inputs: AircraftInputs, value: f64) -> AircraftInputs {
        match self {
            Self::CruiseSpeed => inputs.with_cruise_speed(value),
            Self::CruiseRange => inputs.with_cruise_range(value),
            Self::TotalPropulsionEfficiency => inputs.with_total_propulsion_efficiency(value),
            Self::Weight => inputs.with_weight(value),
            Self::ZeroLiftDragCoeff => inputs.with_zero_lift_drag_coeff(value),
        }
    }
}

impl From<SweepParameterConfig> for SweepParameter {
    fn from(value: SweepParameterConfig) -> Self {
        match value {
            SweepParameterConfig::CruiseSpeed => Self::CruiseSpeed,
            SweepParameterConfig::CruiseRange => Self::CruiseRange,
            SweepParameterConfig::TotalPropulsionEfficiency => Self::TotalPropulsionEfficiency,
            SweepParameterConfig::Weight => Self::Weight,
            SweepParameterConfig::ZeroLiftDragCoeff => Self::ZeroLiftDragCoeff,
        }
    }
}

/// Derived output read from each model of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    CruisePower,
    CruiseEnergy,
    HydrogenMass,
    LiftToDragCruise,
}

impl Metric {
    pub fn key(&self) -> &'static str {
        match self {
            Self::CruisePower => "cruise_power",
            Self::CruiseEnergy => "cruise_energy",
            Self::HydrogenMass => "hydrogen_mass_required",
            Self::LiftToDragCruise => "lift_to_drag_cruise",
        }
    }

    pub fn read(&self, model: &AircraftModel) -> f64 {
        match self {
            Self::CruisePower => model.cruise_power().value(),
            Self::CruiseEnergy => model.cruise_energy().value(),
            Self::HydrogenMass => model.hydrogen_mass_required().value(),
            Self::LiftToDragCruise => model.lift_to_drag_cruise().value(),
        }
    }
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::CruisePower => Self::CruisePower,
            MetricConfig::CruiseEnergy => Self::CruiseEnergy,
            MetricConfig::HydrogenMass => Self::HydrogenMass,
            MetricConfig::LiftToDragCruise => Self::LiftToDragCruise,
        }
    }
}

/// `n` evenly spaced values from `start` to `stop`, both ends included.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Fully resolved sweep: base inputs, x axis, metric, optional curve family.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub base: AircraftInputs,
    pub axis: SweepParameter,
    pub axis_values: Vec<f64>,
    pub metric: Metric,
    pub series: Option<(SweepParameter, Vec<f64>)>,
}

/// One labelled curve of `(axis value, metric value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub parameter_value: Option<f64>,
    pub points: Vec<(f64, f64)>,
    /// Axis points whose inputs were rejected.
    pub skipped: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum SweepError {
    #[error("sweep axis has no points")]
    EmptyAxis,
    #[error("series list for '{0}' is empty")]
    EmptySeries(&'static str),
    #[error("series parameter '{0}' is also the axis parameter")]
    ParameterClash(&'static str),
}

impl SweepRequest {
    /// Build a request from a parsed sweep definition.
    pub fn from_config(config: &SweepConfig) -> Result<Self, SweepError> {
        let request = Self {
            base: AircraftInputs::from_config(&config.aircraft),
            axis: config.axis.parameter.into(),
            axis_values: linspace(config.axis.start, config.axis.stop, config.axis.points),
            metric: config.metric.into(),
            series: config
                .series
                .as_ref()
                .map(|s| (s.parameter.into(), s.values.clone())),
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), SweepError> {
        if self.axis_values.is_empty() {
            return Err(SweepError::EmptyAxis);
        }
        if let Some((parameter, values)) = &self.series {
            if *parameter == self.axis {
                return Err(SweepError::ParameterClash(parameter.key()));
            }
            if values.is_empty() {
                return Err(SweepError::EmptySeries(parameter.key()));
            }
        }
        Ok(())
    }
}

/// Evaluate every series across the axis, one model per point.
pub fn run_sweep(request: &SweepRequest) -> Result<Vec<Series>, SweepError> {
    request.validate()?;

    let families: Vec<(String, Option<f64>, AircraftInputs)> = match &request.series {
        Some((parameter, values)) => values
            .iter()
            .map(|&v| {
                (
                    format!("{} = {}", parameter.key(), v),
                    Some(v),
                    parameter.apply(request.base.clone(), v),
                )
            })
            .collect(),
        None => vec![(request.metric.key().to_string(), None, request.base.clone())],
    };

    let series = families
        .into_iter()
        .map(|(label, parameter_value, base)| {
            let results: Vec<(f64, Result<AircraftModel, InvalidInputError>)> = request
                .axis_values
                .par_iter()
                .map(|&x| (x, AircraftModel::new(request.axis.apply(base.clone(), x))))
                .collect();

            let mut points = Vec::with_capacity(results.len());
            let mut skipped = 0;
            for (x, result) in results {
                match result {
                    Ok(model) => points.push((x, request.metric.read(&model))),
                    Err(err) => {
                        warn!(series = %label, x, "skipping sweep point: {err}");
                        skipped += 1;
                    }
                }
            }
            info!(
                series = %label,
                points = points.len(),
                skipped,
                metric = request.metric.key(),
                "sweep series evaluated"
            );
            Series {
                label,
                parameter_value,
                points,
                skipped,
            }
        })
        .collect();

    Ok(series)
}
