//! Eagerly derived aircraft performance model.
//!
//! The derivation is a single pass along a fixed dependency chain:
//! lift coefficient, drag coefficient, L/D (climb and cruise), then cruise
//! power and energy from the cruise L/D, then hydrogen mass from the energy.

mod fields;

pub use fields::FieldRow;

use aero_aerodynamics::energy::{cruise_energy_kwh, cruise_power_kw, hydrogen_mass_kg};
use aero_aerodynamics::polar::{PolarGeometry, drag_coefficient, lift_coefficient, lift_to_drag};
use aero_core::ValueWithMetadata;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::InvalidInputError;
use crate::inputs::AircraftInputs;

/// Quantities computed from [`AircraftInputs`] at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedOutputs {
    lift_coeff_climb: ValueWithMetadata,
    drag_coeff_climb: ValueWithMetadata,
    lift_to_drag_climb: ValueWithMetadata,
    lift_coeff_cruise: ValueWithMetadata,
    drag_coeff_cruise: ValueWithMetadata,
    lift_to_drag_cruise: ValueWithMetadata,
    cruise_power: ValueWithMetadata,
    cruise_energy: ValueWithMetadata,
    hydrogen_mass_required: ValueWithMetadata,
}

/// Aircraft inputs together with their consistent derived outputs.
///
/// There are no setters: a different input set means a new model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftModel {
    inputs: AircraftInputs,
    outputs: DerivedOutputs,
}

impl AircraftModel {
    /// Validate `inputs` and derive every output, or fail without producing a model.
    pub fn new(inputs: AircraftInputs) -> Result<Self, InvalidInputError> {
        match derive(&inputs) {
            Ok(outputs) => {
                debug!(
                    cruise_power_kw = outputs.cruise_power.value(),
                    cruise_energy_kwh = outputs.cruise_energy.value(),
                    lift_to_drag_cruise = outputs.lift_to_drag_cruise.value(),
                    "aircraft model derived"
                );
                Ok(Self { inputs, outputs })
            }
            Err(err) => {
                warn!(field = err.field(), "aircraft model rejected: {err}");
                Err(err)
            }
        }
    }

    pub fn inputs(&self) -> &AircraftInputs {
        &self.inputs
    }

    pub fn outputs(&self) -> &DerivedOutputs {
        &self.outputs
    }

    pub fn weight(&self) -> &ValueWithMetadata {
        &self.inputs.weight
    }

    pub fn wing_area(&self) -> &ValueWithMetadata {
        &self.inputs.wing_area
    }

    pub fn wing_span(&self) -> &ValueWithMetadata {
        &self.inputs.wing_span
    }

    pub fn cruise_speed(&self) -> &ValueWithMetadata {
        &self.inputs.cruise_speed
    }

    pub fn climb_speed(&self) -> &ValueWithMetadata {
        &self.inputs.climb_speed
    }

    pub fn cruise_range(&self) -> &ValueWithMetadata {
        &self.inputs.cruise_range
    }

    pub fn cruise_height(&self) -> &ValueWithMetadata {
        &self.inputs.cruise_height
    }

    pub fn oswald_efficiency(&self) -> &ValueWithMetadata {
        &self.inputs.oswald_efficiency
    }

    pub fn zero_lift_drag_coeff(&self) -> &ValueWithMetadata {
        &self.inputs.zero_lift_drag_coeff
    }

    pub fn total_propulsion_efficiency(&self) -> &ValueWithMetadata {
        &self.inputs.total_propulsion_efficiency
    }

    pub fn air_density_climb(&self) -> &ValueWithMetadata {
        &self.inputs.air_density_climb
    }

    pub fn air_density_cruise(&self) -> &ValueWithMetadata {
        &self.inputs.air_density_cruise
    }

    pub fn lift_coeff_climb(&self) -> &ValueWithMetadata {
        &self.outputs.lift_coeff_climb
    }

    pub fn drag_coeff_climb(&self) -> &ValueWithMetadata {
        &self.outputs.drag_coeff_climb
    }

    pub fn lift_to_drag_climb(&self) -> &ValueWithMetadata {
        &self.outputs.lift_to_drag_climb
    }

    pub fn lift_coeff_cruise(&self) -> &ValueWithMetadata {
        &self.outputs.lift_coeff_cruise
    }

    pub fn drag_coeff_cruise(&self) -> &ValueWithMetadata {
        &self.outputs.drag_coeff_cruise
    }

    pub fn lift_to_drag_cruise(&self) -> &ValueWithMetadata {
        &self.outputs.lift_to_drag_cruise
    }

    /// Required cruise power in kW.
    pub fn cruise_power(&self) -> &ValueWithMetadata {
        &self.outputs.cruise_power
    }

    /// Required cruise energy over the cruise range in kWh.
    pub fn cruise_energy(&self) -> &ValueWithMetadata {
        &self.outputs.cruise_energy
    }

    /// Hydrogen mass holding the cruise energy, in kg.
    pub fn hydrogen_mass_required(&self) -> &ValueWithMetadata {
        &self.outputs.hydrogen_mass_required
    }

    /// Polar coefficients of this aircraft, for tracing the full drag polar.
    pub fn polar_geometry(&self) -> PolarGeometry {
        PolarGeometry {
            cd0: self.inputs.zero_lift_drag_coeff.value(),
            wing_span_m: self.inputs.wing_span.value(),
            wing_area_m2: self.inputs.wing_area.value(),
            oswald_efficiency: self.inputs.oswald_efficiency.value(),
        }
    }
}

fn finite(field: &'static str, value: &ValueWithMetadata) -> Result<f64, InvalidInputError> {
    let value = value.value();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

fn nonzero(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value == 0.0 {
        Err(InvalidInputError::ZeroDenominator { field })
    } else {
        Ok(value)
    }
}

fn denominator(field: &'static str, value: &ValueWithMetadata) -> Result<f64, InvalidInputError> {
    nonzero(field, finite(field, value)?)
}

fn checked(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::NonFiniteResult { field, value })
    }
}

fn output(value: f64, name: &str, unit: &str) -> ValueWithMetadata {
    ValueWithMetadata::new(value).with_name(name).with_unit(unit)
}

fn derive(inputs: &AircraftInputs) -> Result<DerivedOutputs, InvalidInputError> {
    let weight = finite("weight", &inputs.weight)?;
    let wing_area = denominator("wing_area", &inputs.wing_area)?;
    let wing_span = denominator("wing_span", &inputs.wing_span)?;
    let cruise_speed = denominator("cruise_speed", &inputs.cruise_speed)?;
    let climb_speed = denominator("climb_speed", &inputs.climb_speed)?;
    let cruise_range = finite("cruise_range", &inputs.cruise_range)?;
    // Informational only, but it still lands in the reported table.
    finite("cruise_height", &inputs.cruise_height)?;
    let e = denominator("oswald_efficiency", &inputs.oswald_efficiency)?;
    let cd0 = finite("zero_lift_drag_coeff", &inputs.zero_lift_drag_coeff)?;
    let eta = denominator(
        "total_propulsion_efficiency",
        &inputs.total_propulsion_efficiency,
    )?;
    let rho_climb = denominator("air_density_climb", &inputs.air_density_climb)?;
    let rho_cruise = denominator("air_density_cruise", &inputs.air_density_cruise)?;

    let cl_climb = checked(
        "lift_coeff_climb",
        lift_coefficient(weight, wing_area, climb_speed, rho_climb),
    )?;
    let cd_climb = checked(
        "drag_coeff_climb",
        drag_coefficient(cd0, cl_climb, wing_span, wing_area, e),
    )?;
    let ld_climb = checked(
        "lift_to_drag_climb",
        lift_to_drag(cl_climb, nonzero("drag_coeff_climb", cd_climb)?),
    )?;

    let cl_cruise = checked(
        "lift_coeff_cruise",
        lift_coefficient(weight, wing_area, cruise_speed, rho_cruise),
    )?;
    let cd_cruise = checked(
        "drag_coeff_cruise",
        drag_coefficient(cd0, cl_cruise, wing_span, wing_area, e),
    )?;
    let ld_cruise = checked(
        "lift_to_drag_cruise",
        lift_to_drag(cl_cruise, nonzero("drag_coeff_cruise", cd_cruise)?),
    )?;
    let ld_cruise = nonzero("lift_to_drag_cruise", ld_cruise)?;

    let power = checked(
        "cruise_power",
        cruise_power_kw(weight, ld_cruise, cruise_speed, eta),
    )?;
    let energy = checked(
        "cruise_energy",
        cruise_energy_kwh(cruise_range, weight, eta, ld_cruise),
    )?;
    let hydrogen = checked("hydrogen_mass_required", hydrogen_mass_kg(energy))?;

    Ok(DerivedOutputs {
        lift_coeff_climb: output(cl_climb, "cL climb", "-"),
        drag_coeff_climb: output(cd_climb, "cD climb", "-"),
        lift_to_drag_climb: output(ld_climb, "L/D climb", "-"),
        lift_coeff_cruise: output(cl_cruise, "cL cruise", "-"),
        drag_coeff_cruise: output(cd_cruise, "cD cruise", "-"),
        lift_to_drag_cruise: output(ld_cruise, "L/D cruise", "-"),
        cruise_power: output(power, "Power cruise", "kW"),
        cruise_energy: output(energy, "Total energy", "kWh"),
        hydrogen_mass_required: output(hydrogen, "Mass H2", "kg"),
    })
}
