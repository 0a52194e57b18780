//! Aircraft performance model: validated inputs in, lift/drag/power/energy out.

pub mod error;
pub mod inputs;
pub mod model;

pub use error::InvalidInputError;
pub use inputs::AircraftInputs;
pub use model::{AircraftModel, DerivedOutputs, FieldRow};
