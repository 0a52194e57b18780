//! Lift coefficient, parabolic drag polar, and lift-to-drag ratio.
//!
//! All functions are raw arithmetic: they do not guard against zero denominators.
//! Callers that need validated results build an `AircraftModel` instead.

use std::f64::consts::PI;

use aero_core::constants::G;
use aero_core::units::kmh_to_ms;
use thiserror::Error;

/// Lift coefficient required for level flight at `speed_kmh` in air of density `rho_kg_m3`.
///
/// `cL = 2 m g / (rho S v²)` with `v` converted from km/h to m/s.
pub fn lift_coefficient(weight_kg: f64, wing_area_m2: f64, speed_kmh: f64, rho_kg_m3: f64) -> f64 {
    (2.0 * weight_kg * G) / (rho_kg_m3 * wing_area_m2 * kmh_to_ms(speed_kmh).powi(2))
}

/// Wing aspect ratio `b² / S`.
#[inline]
pub fn aspect_ratio(wing_span_m: f64, wing_area_m2: f64) -> f64 {
    wing_span_m.powi(2) / wing_area_m2
}

/// Drag coefficient from the parabolic polar `cD = cD0 + cL² / (π AR e)`.
pub fn drag_coefficient(
    cd0: f64,
    cl: f64,
    wing_span_m: f64,
    wing_area_m2: f64,
    oswald_efficiency: f64,
) -> f64 {
    cd0 + cl.powi(2) / (PI * aspect_ratio(wing_span_m, wing_area_m2) * oswald_efficiency)
}

#[inline]
pub fn lift_to_drag(cl: f64, cd: f64) -> f64 {
    cl / cd
}

/// Wing geometry and polar coefficients needed to trace a drag polar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarGeometry {
    pub cd0: f64,
    pub wing_span_m: f64,
    pub wing_area_m2: f64,
    pub oswald_efficiency: f64,
}

/// One `(cD, cL)` point on the drag polar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub cd: f64,
    pub cl: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum PolarError {
    #[error("polar sampling needs at least two points, got {0}")]
    TooFewPoints(usize),
    #[error("wing span, wing area and Oswald efficiency must be positive and finite")]
    DegenerateGeometry,
}

/// Lift coefficient range traced by default: slight negative lift up to cL = 1.
pub const DEFAULT_CL_RANGE: (f64, f64) = (-0.2, 1.0);
pub const DEFAULT_POLAR_POINTS: usize = 100;

/// Sample the drag polar at `points` evenly spaced lift coefficients in `[cl_min, cl_max]`.
pub fn sample_polar(
    geometry: &PolarGeometry,
    cl_min: f64,
    cl_max: f64,
    points: usize,
) -> Result<Vec<PolarPoint>, PolarError> {
    if points < 2 {
        return Err(PolarError::TooFewPoints(points));
    }
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !(positive(geometry.wing_span_m)
        && positive(geometry.wing_area_m2)
        && positive(geometry.oswald_efficiency))
    {
        return Err(PolarError::DegenerateGeometry);
    }

    let step = (cl_max - cl_min) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| {
            let cl = cl_min + step * i as f64;
            PolarPoint {
                cd: drag_coefficient(
                    geometry.cd0,
                    cl,
                    geometry.wing_span_m,
                    geometry.wing_area_m2,
                    geometry.oswald_efficiency,
                ),
                cl,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const GEOMETRY: PolarGeometry = PolarGeometry {
        cd0: 0.03,
        wing_span_m: 13.1,
        wing_area_m2: 16.3,
        oswald_efficiency: 0.8,
    };

    #[test]
    fn lift_coefficient_matches_hand_calculation() {
        // 1950 kg at 250 km/h in 0.909 kg/m³
        let v = 250.0 / 3.6;
        let expected = (2.0 * 1950.0 * 9.81) / (0.909 * 16.3 * v * v);
        let cl = lift_coefficient(1950.0, 16.3, 250.0, 0.909);
        assert_relative_eq!(cl, expected, max_relative = 1e-12);
        assert_relative_eq!(cl, 0.5354, epsilon = 5e-5);
    }

    #[test]
    fn lift_coefficient_scales_with_inverse_speed_squared() {
        let slow = lift_coefficient(1980.0, 16.3, 125.0, 1.225);
        let fast = lift_coefficient(1980.0, 16.3, 250.0, 1.225);
        assert_relative_eq!(slow / fast, 4.0, max_relative = 1e-12);
    }

    #[test]
    fn drag_coefficient_equals_cd0_at_zero_lift() {
        assert_eq!(drag_coefficient(0.03, 0.0, 13.1, 16.3, 0.8), 0.03);
    }

    #[test]
    fn induced_drag_uses_aspect_ratio() {
        let cl = 0.5;
        let ar = 13.1 * 13.1 / 16.3;
        let cd = drag_coefficient(0.03, cl, 13.1, 16.3, 0.8);
        assert_relative_eq!(cd, 0.03 + cl * cl / (PI * ar * 0.8), max_relative = 1e-12);
        assert_relative_eq!(aspect_ratio(13.1, 16.3), ar);
    }

    #[test]
    fn polar_is_symmetric_about_zero_lift() {
        let points = sample_polar(&GEOMETRY, -0.5, 0.5, 11).unwrap();
        assert_eq!(points.len(), 11);
        assert_relative_eq!(points[0].cl, -0.5);
        assert_relative_eq!(points[10].cl, 0.5, epsilon = 1e-12);
        assert_relative_eq!(points[0].cd, points[10].cd, max_relative = 1e-12);
        assert_relative_eq!(points[5].cd, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn polar_default_range_spans_minus_point_two_to_one() {
        let (lo, hi) = DEFAULT_CL_RANGE;
        let points = sample_polar(&GEOMETRY, lo, hi, DEFAULT_POLAR_POINTS).unwrap();
        assert_eq!(points.len(), 100);
        let min_cd = points.iter().map(|p| p.cd).fold(f64::INFINITY, f64::min);
        assert!(min_cd >= 0.03);
    }

    #[test]
    fn polar_rejects_bad_requests() {
        assert_eq!(
            sample_polar(&GEOMETRY, 0.0, 1.0, 1),
            Err(PolarError::TooFewPoints(1))
        );
        let flat = PolarGeometry {
            wing_span_m: 0.0,
            ..GEOMETRY
        };
        assert_eq!(
            sample_polar(&flat, 0.0, 1.0, 10),
            Err(PolarError::DegenerateGeometry)
        );
    }
}
