//! Ordered enumeration of model fields for tabular consumers.

use aero_core::{ValueWithMetadata, round2};
use serde::Serialize;

use super::AircraftModel;

type Accessor = fn(&AircraftModel) -> &ValueWithMetadata;

/// Every input, then every derived output, in declaration order.
const FIELDS: [(&str, Accessor); 21] = [
    ("weight", AircraftModel::weight),
    ("wing_area", AircraftModel::wing_area),
    ("wing_span", AircraftModel::wing_span),
    ("cruise_speed", AircraftModel::cruise_speed),
    ("climb_speed", AircraftModel::climb_speed),
    ("cruise_range", AircraftModel::cruise_range),
    ("cruise_height", AircraftModel::cruise_height),
    ("oswald_efficiency", AircraftModel::oswald_efficiency),
    ("zero_lift_drag_coeff", AircraftModel::zero_lift_drag_coeff),
    (
        "total_propulsion_efficiency",
        AircraftModel::total_propulsion_efficiency,
    ),
    ("air_density_climb", AircraftModel::air_density_climb),
    ("air_density_cruise", AircraftModel::air_density_cruise),
    ("lift_coeff_climb", AircraftModel::lift_coeff_climb),
    ("drag_coeff_climb", AircraftModel::drag_coeff_climb),
    ("lift_to_drag_climb", AircraftModel::lift_to_drag_climb),
    ("lift_coeff_cruise", AircraftModel::lift_coeff_cruise),
    ("drag_coeff_cruise", AircraftModel::drag_coeff_cruise),
    ("lift_to_drag_cruise", AircraftModel::lift_to_drag_cruise),
    ("cruise_power", AircraftModel::cruise_power),
    ("cruise_energy", AircraftModel::cruise_energy),
    ("hydrogen_mass_required", AircraftModel::hydrogen_mass_required),
];

const SUMMARY: [&str; 4] = [
    "cruise_power",
    "cruise_energy",
    "hydrogen_mass_required",
    "lift_to_drag_cruise",
];

/// One display row: field key, label, unit, and the value rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub key: &'static str,
    pub label: String,
    pub unit: String,
    pub value: f64,
}

impl FieldRow {
    fn new(key: &'static str, value: &ValueWithMetadata) -> Self {
        Self {
            key,
            label: value.name().to_string(),
            unit: value.unit().to_string(),
            value: round2(value.value()),
        }
    }
}

impl AircraftModel {
    /// All fields as display rows, inputs first.
    pub fn rows(&self) -> Vec<FieldRow> {
        FIELDS
            .iter()
            .map(|(key, get)| FieldRow::new(*key, get(self)))
            .collect()
    }

    /// The headline figures: cruise power, total energy, hydrogen mass and cruise L/D.
    pub fn summary(&self) -> Vec<FieldRow> {
        SUMMARY
            .iter()
            .filter_map(|wanted| {
                FIELDS
                    .iter()
                    .find(|(key, _)| key == wanted)
                    .map(|(key, get)| FieldRow::new(*key, get(self)))
            })
            .collect()
    }

    /// Look up a field by key.
    pub fn field(&self, key: &str) -> Option<&ValueWithMetadata> {
        FIELDS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, get)| get(self))
    }
}
