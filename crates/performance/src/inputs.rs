//! Annotated design inputs of an aircraft.

use aero_config::AircraftConfig;
use aero_core::constants::SEA_LEVEL_DENSITY;
use aero_core::{Boundaries, ValueWithMetadata};
use serde::Serialize;

/// Sea-level density, also the default for both flight phases.
pub const DEFAULT_AIR_DENSITY: f64 = SEA_LEVEL_DENSITY;

/// Identity inputs of an [`AircraftModel`](crate::AircraftModel).
///
/// Unit labels are descriptive; speeds are always interpreted as km/h, the
/// range and height as metres.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftInputs {
    pub weight: ValueWithMetadata,
    pub wing_area: ValueWithMetadata,
    pub wing_span: ValueWithMetadata,
    pub cruise_speed: ValueWithMetadata,
    pub climb_speed: ValueWithMetadata,
    pub cruise_range: ValueWithMetadata,
    pub cruise_height: ValueWithMetadata,
    pub oswald_efficiency: ValueWithMetadata,
    pub zero_lift_drag_coeff: ValueWithMetadata,
    pub total_propulsion_efficiency: ValueWithMetadata,
    pub air_density_climb: ValueWithMetadata,
    pub air_density_cruise: ValueWithMetadata,
}

fn annotated(
    value: f64,
    name: &str,
    unit: &str,
    description: &str,
    range: Option<(f64, f64)>,
) -> ValueWithMetadata {
    let v = ValueWithMetadata::new(value)
        .with_name(name)
        .with_unit(unit)
        .with_description(description);
    match range.and_then(|(lo, hi)| Boundaries::new(lo, hi).ok()) {
        Some(b) => v.with_boundaries(b),
        None => v,
    }
}

impl AircraftInputs {
    /// Reference configuration: 1980 kg MTOW, 16.3 m² / 13.1 m wing, 250 km/h cruise over 370 km.
    pub fn baseline() -> Self {
        Self::from_config(&AircraftConfig::default())
    }

    /// Attach names, units and advisory boundaries to the raw numbers of a config.
    pub fn from_config(config: &AircraftConfig) -> Self {
        Self {
            weight: annotated(config.weight_kg, "Weight", "kg", "Maximum take-off mass", None),
            wing_area: annotated(config.wing_area_m2, "Wing area", "m²", "", None),
            wing_span: annotated(config.wing_span_m, "Wing span", "m", "", None),
            cruise_speed: annotated(
                config.cruise_speed_kmh,
                "Cruise speed",
                "km/h",
                "",
                None,
            ),
            climb_speed: annotated(config.climb_speed_kmh, "Climb speed", "km/h", "", None),
            cruise_range: annotated(
                config.cruise_range_m,
                "Cruise range",
                "m",
                "Distance flown at cruise speed",
                None,
            ),
            cruise_height: annotated(
                config.cruise_height_m,
                "Cruise height",
                "m",
                "Informational; air density is given explicitly",
                None,
            ),
            oswald_efficiency: annotated(
                config.oswald_efficiency,
                "Oswald efficiency",
                "-",
                "Span efficiency factor e",
                Some((0.0, 1.0)),
            ),
            zero_lift_drag_coeff: annotated(
                config.zero_lift_drag_coeff,
                "cD0",
                "-",
                "0.02 - 0.04 according to Filippone 2000",
                Some((0.02, 0.04)),
            ),
            total_propulsion_efficiency: annotated(
                config.total_propulsion_efficiency,
                "Total propulsion efficiency",
                "-",
                "Fuel cell to thrust chain efficiency",
                Some((0.0, 1.0)),
            ),
            air_density_climb: annotated(
                config.atmosphere.climb_density_kg_m3,
                "Air density climb",
                "kg/m³",
                "",
                None,
            ),
            air_density_cruise: annotated(
                config.atmosphere.cruise_density_kg_m3,
                "Air density cruise",
                "kg/m³",
                "",
                None,
            ),
        }
    }

    pub fn with_weight(mut self, kg: f64) -> Self {
        self.weight = self.weight.with_value(kg);
        self
    }

    pub fn with_wing_area(mut self, m2: f64) -> Self {
        self.wing_area = self.wing_area.with_value(m2);
        self
    }

    pub fn with_wing_span(mut self, m: f64) -> Self {
        self.wing_span = self.wing_span.with_value(m);
        self
    }

    pub fn with_cruise_speed(mut self, kmh: f64) -> Self {
        self.cruise_speed = self.cruise_speed.with_value(kmh);
        self
    }

    pub fn with_climb_speed(mut self, kmh: f64) -> Self {
        self.climb_speed = self.climb_speed.with_value(kmh);
        self
    }

    pub fn with_cruise_range(mut self, m: f64) -> Self {
        self.cruise_range = self.cruise_range.with_value(m);
        self
    }

    pub fn with_cruise_height(mut self, m: f64) -> Self {
        self.cruise_height = self.cruise_height.with_value(m);
        self
    }

    pub fn with_oswald_efficiency(mut self, e: f64) -> Self {
        self.oswald_efficiency = self.oswald_efficiency.with_value(e);
        self
    }

    pub fn with_zero_lift_drag_coeff(mut self, cd0: f64) -> Self {
        self.zero_lift_drag_coeff = self.zero_lift_drag_coeff.with_value(cd0);
        self
    }

    pub fn with_total_propulsion_efficiency(mut self, eta: f64) -> Self {
        self.total_propulsion_efficiency = self.total_propulsion_efficiency.with_value(eta);
        self
    }

    pub fn with_air_density_climb(mut self, rho: f64) -> Self {
        self.air_density_climb = self.air_density_climb.with_value(rho);
        self
    }

    pub fn with_air_density_cruise(mut self, rho: f64) -> Self {
        self.air_density_cruise = self.air_density_cruise.with_value(rho);
        self
    }

    /// Same air density for both phases.
    pub fn with_air_density(self, rho: f64) -> Self {
        self.with_air_density_climb(rho).with_air_density_cruise(rho)
    }
}

impl Default for AircraftInputs {
    fn default() -> Self {
        Self::baseline()
    }
}

impl From<&AircraftConfig> for AircraftInputs {
    fn from(config: &AircraftConfig) -> Self {
        Self::from_config(config)
    }
}
