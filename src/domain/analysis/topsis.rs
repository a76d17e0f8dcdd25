//! TOPSIS Aggregator - Relative closeness to the ideal solution.

use serde::{Deserialize, Serialize};

use super::numeric::{column, nan_max, nan_min};
use super::NormalizedMatrix;
use crate::domain::matrix::{MatrixError, MatrixValidator};

/// Intermediate and final values of a TOPSIS pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisBreakdown {
    /// Normalized matrix multiplied element-wise by the weights.
    pub weighted: Vec<Vec<f64>>,
    /// Per-column maximum of the weighted matrix.
    pub positive_ideal: Vec<f64>,
    /// Per-column minimum of the weighted matrix.
    pub negative_ideal: Vec<f64>,
    /// Euclidean distance of each alternative to the positive ideal (D+).
    pub distance_to_positive: Vec<f64>,
    /// Euclidean distance of each alternative to the negative ideal (D-).
    pub distance_to_negative: Vec<f64>,
    /// D- / (D+ + D-) per alternative.
    pub closeness: Vec<f64>,
}

/// Ideal-solution distance scorer.
pub struct TopsisAggregator;

impl TopsisAggregator {
    /// Runs steps 2-5 of TOPSIS on an already normalized matrix.
    ///
    /// Closeness is NaN when an alternative sits on both ideals at once
    /// (`D+ + D- == 0`); that value is returned, not replaced.
    pub fn evaluate(
        normalized: &NormalizedMatrix,
        weights: &[f64],
    ) -> Result<TopsisBreakdown, MatrixError> {
        MatrixValidator::check_weights(normalized.columns, weights.len())?;

        let weighted: Vec<Vec<f64>> = normalized
            .rows
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect();

        let positive_ideal: Vec<f64> = (0..normalized.columns)
            .map(|j| nan_max(column(&weighted, j)))
            .collect();
        let negative_ideal: Vec<f64> = (0..normalized.columns)
            .map(|j| nan_min(column(&weighted, j)))
            .collect();

        let distance_to_positive: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean(row, &positive_ideal))
            .collect();
        let distance_to_negative: Vec<f64> = weighted
            .iter()
            .map(|row| euclidean(row, &negative_ideal))
            .collect();

        let closeness = distance_to_positive
            .iter()
            .zip(&distance_to_negative)
            .map(|(d_pos, d_neg)| d_neg / (d_pos + d_neg))
            .collect();

        Ok(TopsisBreakdown {
            weighted,
            positive_ideal,
            negative_ideal,
            distance_to_positive,
            distance_to_negative,
            closeness,
        })
    }

    /// Closeness scores only.
    pub fn score(normalized: &NormalizedMatrix, weights: &[f64]) -> Result<Vec<f64>, MatrixError> {
        Self::evaluate(normalized, weights).map(|b| b.closeness)
    }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}
