//! Ordinal input scale for criterion ratings.
//!
//! Ratings are entered as small integers (a slider from 1 to 5 by default)
//! and scaled down by a divisor before they reach the decision matrix.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// An integer level accepted by an [`InputScale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleLevel(u8);

impl ScaleLevel {
    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Bounds and divisor of the rating input scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputScale {
    pub min: u8,
    pub max: u8,
    pub divisor: f64,
}

impl InputScale {
    /// Creates a new scale.
    pub fn new(min: u8, max: u8, divisor: f64) -> Self {
        Self { min, max, divisor }
    }

    /// Checks a raw level against the bounds.
    pub fn level(&self, value: u8) -> Result<ScaleLevel, ValidationError> {
        if value < self.min || value > self.max {
            return Err(ValidationError::out_of_range(
                "level",
                f64::from(self.min),
                f64::from(self.max),
                f64::from(value),
            ));
        }
        Ok(ScaleLevel(value))
    }

    /// Converts a level into the raw criterion value stored in the matrix.
    pub fn to_value(&self, level: ScaleLevel) -> f64 {
        f64::from(level.value()) / self.divisor
    }

    /// Validates every level and converts them in order.
    pub fn convert(&self, levels: &[u8]) -> Result<Vec<f64>, ValidationError> {
        levels
            .iter()
            .map(|&raw| self.level(raw).map(|level| self.to_value(level)))
            .collect()
    }
}

impl Default for InputScale {
    fn default() -> Self {
        Self::new(1, 5, 10.0)
    }
}
