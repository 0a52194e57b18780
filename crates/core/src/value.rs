//! Scalars annotated with unit, display name, and advisory valid range.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when building a [`Boundaries`] pair.
#[derive(Debug, Error, PartialEq)]
pub enum BoundariesError {
    #[error("boundary limits must not be NaN")]
    NotANumber,
    #[error("lower boundary {min} exceeds upper boundary {max}")]
    Inverted { min: f64, max: f64 },
}

/// Inclusive `[min, max]` range attached to a value.
///
/// Purely advisory: nothing in the workspace clamps or rejects a value that
/// lies outside its boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boundaries {
    min: f64,
    max: f64,
}

impl Boundaries {
    pub fn new(min: f64, max: f64) -> Result<Self, BoundariesError> {
        if min.is_nan() || max.is_nan() {
            return Err(BoundariesError::NotANumber);
        }
        if min > max {
            return Err(BoundariesError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether `value` falls inside the inclusive range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A scalar carrying its unit label, display name, optional boundaries and description.
///
/// Values are immutable once built; the `with_*` methods return new instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueWithMetadata {
    value: f64,
    unit: String,
    boundaries: Option<Boundaries>,
    name: String,
    description: String,
}

impl ValueWithMetadata {
    /// Bare value with empty unit, name and description and no boundaries.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            unit: String::new(),
            boundaries: None,
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_boundaries(mut self, boundaries: Boundaries) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Copy of this value with a different number and the same metadata.
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn boundaries(&self) -> Option<Boundaries> {
        self.boundaries
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `None` when unconstrained, otherwise whether the value lies inside its boundaries.
    pub fn within_boundaries(&self) -> Option<bool> {
        self.boundaries.map(|b| b.contains(self.value))
    }
}

impl From<f64> for ValueWithMetadata {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
