//! Cruise power, cruise energy, and hydrogen mass equivalent.

use aero_core::constants::{G, HYDROGEN_SPECIFIC_ENERGY_KWH_PER_KG, KMH_PER_MS};
use aero_core::units::kmh_to_ms;

/// Shaft-to-thrust power needed to hold cruise, in kW.
///
/// `P = (m g / (L/D · 1000)) · (v / eta)` with `v` in m/s.
pub fn cruise_power_kw(
    weight_kg: f64,
    lift_to_drag_cruise: f64,
    cruise_speed_kmh: f64,
    total_propulsion_efficiency: f64,
) -> f64 {
    ((weight_kg * G) / (lift_to_drag_cruise * 1000.0))
        * (kmh_to_ms(cruise_speed_kmh) / total_propulsion_efficiency)
}

/// Energy needed to fly `cruise_range_m` at the given L/D, in kWh.
pub fn cruise_energy_kwh(
    cruise_range_m: f64,
    weight_kg: f64,
    total_propulsion_efficiency: f64,
    lift_to_drag_cruise: f64,
) -> f64 {
    ((cruise_range_m / 1_000_000.0) * G * weight_kg)
        / (total_propulsion_efficiency * lift_to_drag_cruise * KMH_PER_MS)
}

/// Mass of hydrogen holding `energy_kwh`, in kg.
#[inline]
pub fn hydrogen_mass_kg(energy_kwh: f64) -> f64 {
    energy_kwh / HYDROGEN_SPECIFIC_ENERGY_KWH_PER_KG
}
