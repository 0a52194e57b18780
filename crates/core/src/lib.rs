//! Core units, constants, and shared primitives for the Aircraft Energy Calculator workspace.

pub mod value;

pub use value::{Boundaries, BoundariesError, ValueWithMetadata};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational acceleration used throughout the performance equations (m/s²).
    pub const G: f64 = 9.81;
    /// ISA sea-level air density (kg/m³).
    pub const SEA_LEVEL_DENSITY: f64 = 1.225;
    /// Kilometres per hour in one metre per second.
    pub const KMH_PER_MS: f64 = 3.6;
    /// Usable specific energy of hydrogen (kWh/kg).
    pub const HYDROGEN_SPECIFIC_ENERGY_KWH_PER_KG: f64 = 33.33;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::KMH_PER_MS;

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v / KMH_PER_MS
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * KMH_PER_MS
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg * (std::f64::consts::PI / 180.0)
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Round to two decimals, the display convention for reported values.
///
/// Magnitudes too large to scale are returned unchanged; they carry no
/// fractional digits anyway.
#[inline]
pub fn round2(v: f64) -> f64 {
    let scaled = v * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn speed_conversions_are_inverse() {
        assert_relative_eq!(units::kmh_to_ms(36.0), 10.0);
        assert_relative_eq!(units::ms_to_kmh(units::kmh_to_ms(250.0)), 250.0, epsilon = 1e-12);
    }

    #[test]
    fn degrees_convert_to_radians() {
        assert_relative_eq!(units::deg_to_rad(180.0), std::f64::consts::PI);
        assert_eq!(units::deg_to_rad(0.0), 0.0);
    }

    #[test]
    fn distance_conversions() {
        assert_eq!(units::km_to_m(370.0), 370_000.0);
        assert_eq!(units::m_to_km(350_000.0), 350.0);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round2(327.122_532), 327.12);
        assert_eq!(round2(14.525_69), 14.53);
        assert_eq!(round2(-0.004), -0.0);
    }

    #[test]
    fn rounding_leaves_huge_values_finite() {
        assert_eq!(round2(1e307), 1e307);
        assert_eq!(round2(-f64::MAX), -f64::MAX);
        assert!(round2(f64::NAN).is_nan());
    }
}
