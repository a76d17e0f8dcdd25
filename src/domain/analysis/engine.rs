//! Ranking Engine - Validate, normalize, aggregate, rank.
//!
//! The engine holds only the immutable criteria configuration. The decision
//! matrix is owned by the caller and passed in on every call; nothing is
//! cached between calls.

use tracing::{debug, warn};

use super::{
    Evaluation, NormalizedMatrix, Normalizer, Ranker, Ranking, RankingMethod, SawAggregator,
    TopsisAggregator, TopsisBreakdown,
};
use crate::domain::foundation::Polarity;
use crate::domain::matrix::{CriteriaSet, DecisionMatrix, MatrixError, MatrixValidator};

/// Runs a full ranking pass with explicit criteria vectors.
///
/// # Errors
/// - `ShapeMismatch` if the column count disagrees with the polarity or
///   weight count (checked before any arithmetic)
/// - `EmptyMatrix` if the matrix has no rows
pub fn evaluate(
    matrix: &DecisionMatrix,
    polarities: &[Polarity],
    weights: &[f64],
    method: RankingMethod,
) -> Result<Evaluation, MatrixError> {
    MatrixValidator::check_aggregation(matrix.criteria_count(), polarities.len(), weights.len())?;
    if matrix.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }

    debug!(
        method = %method,
        alternatives = matrix.alternative_count(),
        criteria = matrix.criteria_count(),
        "Computing ranking"
    );

    let normalized = Normalizer::normalize(matrix, polarities, method.normalization_scheme())?;
    let (scores, topsis) = aggregate(&normalized, weights, method)?;
    let ranks = Ranker::rank(&scores);

    let ranking = Ranking {
        method,
        scores,
        ranks,
    };

    if ranking.has_non_finite_scores() {
        warn!(
            method = %method,
            "Ranking contains non-finite scores; degenerate input values"
        );
    }

    debug!(method = %method, best = ?ranking.best_index(), "Ranking computed");

    Ok(Evaluation {
        normalized,
        ranking,
        topsis,
    })
}

fn aggregate(
    normalized: &NormalizedMatrix,
    weights: &[f64],
    method: RankingMethod,
) -> Result<(Vec<f64>, Option<TopsisBreakdown>), MatrixError> {
    match method {
        RankingMethod::Saw => Ok((SawAggregator::score(normalized, weights)?, None)),
        RankingMethod::Topsis => {
            let breakdown = TopsisAggregator::evaluate(normalized, weights)?;
            Ok((breakdown.closeness.clone(), Some(breakdown)))
        }
    }
}

/// SAW scores and ranks.
pub fn compute_saw(
    matrix: &DecisionMatrix,
    polarities: &[Polarity],
    weights: &[f64],
) -> Result<Ranking, MatrixError> {
    evaluate(matrix, polarities, weights, RankingMethod::Saw).map(|e| e.ranking)
}

/// TOPSIS closeness scores and ranks.
pub fn compute_topsis(
    matrix: &DecisionMatrix,
    polarities: &[Polarity],
    weights: &[f64],
) -> Result<Ranking, MatrixError> {
    evaluate(matrix, polarities, weights, RankingMethod::Topsis).map(|e| e.ranking)
}

/// Engine bound to a fixed criteria set.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    criteria: CriteriaSet,
    polarities: Vec<Polarity>,
    weights: Vec<f64>,
}

impl RankingEngine {
    /// Creates an engine for the given criteria.
    pub fn new(criteria: CriteriaSet) -> Self {
        let polarities = criteria.polarities();
        let weights = criteria.weights();
        Self {
            criteria,
            polarities,
            weights,
        }
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Evaluates the matrix with the given method.
    pub fn evaluate(
        &self,
        matrix: &DecisionMatrix,
        method: RankingMethod,
    ) -> Result<Evaluation, MatrixError> {
        evaluate(matrix, &self.polarities, &self.weights, method)
    }

    pub fn compute_saw(&self, matrix: &DecisionMatrix) -> Result<Ranking, MatrixError> {
        compute_saw(matrix, &self.polarities, &self.weights)
    }

    pub fn compute_topsis(&self, matrix: &DecisionMatrix) -> Result<Ranking, MatrixError> {
        compute_topsis(matrix, &self.polarities, &self.weights)
    }
}
