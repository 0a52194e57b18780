use thiserror::Error;

/// Raised when an input set cannot produce a consistent model.
///
/// Construction is atomic: when this is returned no model exists.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("input '{field}' must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("'{field}' appears as a denominator and must not be zero")]
    ZeroDenominator { field: &'static str },
    #[error("derived quantity '{field}' is not finite ({value})")]
    NonFiniteResult { field: &'static str, value: f64 },
}

impl InvalidInputError {
    /// Name of the input or derived field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonFinite { field, .. }
            | Self::ZeroDenominator { field }
            | Self::NonFiniteResult { field, .. } => field,
        }
    }
}
