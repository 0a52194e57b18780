//! Closed-form aerodynamic and energy relations for fixed-wing preliminary design.

pub mod energy;
pub mod polar;
