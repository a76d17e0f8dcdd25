//! Criterion polarity (benefit vs. cost).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Higher raw value is preferable.
    #[default]
    Benefit,
    /// Lower raw value is preferable.
    Cost,
}

impl Polarity {
    /// Returns the lowercase label used in configuration files.
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Benefit => "benefit",
            Polarity::Cost => "cost",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Polarity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(Polarity::Benefit),
            "cost" => Ok(Polarity::Cost),
            other => Err(ValidationError::invalid_format(
                "polarity",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}
