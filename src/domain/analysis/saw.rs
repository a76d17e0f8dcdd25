//! SAW Aggregator - Weighted sum of normalized criterion values.

use super::NormalizedMatrix;
use crate::domain::matrix::{MatrixError, MatrixValidator};

/// Simple Additive Weighting scorer.
pub struct SawAggregator;

impl SawAggregator {
    /// Computes one score per alternative.
    ///
    /// # Algorithm
    /// For each row: score = Σ(normalized[j] × weight[j])
    ///
    /// Higher is better. Scores are not clamped.
    pub fn score(normalized: &NormalizedMatrix, weights: &[f64]) -> Result<Vec<f64>, MatrixError> {
        MatrixValidator::check_weights(normalized.columns, weights.len())?;

        Ok(normalized
            .rows
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).sum())
            .collect())
    }
}
