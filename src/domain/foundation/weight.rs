//! Criterion weight value object, in the half-open interval (0, 1].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Relative importance of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// Creates a Weight, returning error unless `0 < value <= 1`.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(value > 0.0 && value <= 1.0) {
            return Err(ValidationError::out_of_range("weight", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
