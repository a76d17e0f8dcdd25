//! Ranking method and normalization scheme selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How raw criterion values are mapped onto a comparable scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationScheme {
    /// Linear min-max within each alternative's own row (SAW).
    PerRowMinMax,
    /// Euclidean vector normalization down each criterion column (TOPSIS).
    PerColumnVector,
}

/// Multi-criteria aggregation method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMethod {
    /// Simple Additive Weighting.
    #[default]
    Saw,
    /// Technique for Order Preference by Similarity to Ideal Solution.
    Topsis,
}

impl RankingMethod {
    /// The normalization scheme each method is defined with.
    pub fn normalization_scheme(&self) -> NormalizationScheme {
        match self {
            RankingMethod::Saw => NormalizationScheme::PerRowMinMax,
            RankingMethod::Topsis => NormalizationScheme::PerColumnVector,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankingMethod::Saw => "saw",
            RankingMethod::Topsis => "topsis",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RankingMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "saw" => Ok(RankingMethod::Saw),
            "topsis" => Ok(RankingMethod::Topsis),
            other => Err(ValidationError::invalid_format(
                "method",
                format!("expected 'saw' or 'topsis', got '{}'", other),
            )),
        }
    }
}
