//! Preliminary-design performance calculator for fixed-wing aircraft.
//!
//! The member crates are re-exported here so front-ends (the CLI, notebooks
//! driving sweeps) depend on a single library.

pub mod sweep;

pub use aero_aerodynamics as aerodynamics;
pub use aero_config as config;
pub use aero_core::{Boundaries, BoundariesError, ValueWithMetadata, constants, units};
pub use aero_export as export;
pub use aero_performance as performance;
pub use aero_performance::{AircraftInputs, AircraftModel, FieldRow, InvalidInputError};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
