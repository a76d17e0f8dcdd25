//! RankingReport - Display-ready view of one ranking pass.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::{Evaluation, RankingMethod, TopsisBreakdown};
use crate::domain::foundation::Timestamp;
use crate::domain::matrix::{Alternative, CriteriaSet, DecisionMatrix};

/// One line of the rank table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1 = best.
    pub rank: usize,
    /// 1-based row number in the decision matrix.
    pub alternative_number: usize,
    pub label: String,
    pub score: f64,
}

/// Everything a presentation layer shows after processing: raw values,
/// normalized values, scores and the rank table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    pub method: RankingMethod,
    /// Criterion labels in column order.
    pub criteria: Vec<String>,
    /// Raw rows in insertion order.
    pub alternatives: Vec<Alternative>,
    /// Normalized rows in insertion order.
    pub normalized: Vec<Vec<f64>>,
    /// Scores in insertion order.
    pub scores: Vec<f64>,
    /// Ranks in insertion order.
    pub ranks: Vec<usize>,
    /// Rank table sorted ascending by rank.
    pub standings: Vec<Standing>,
    /// TOPSIS intermediates; absent for SAW.
    pub topsis: Option<TopsisBreakdown>,
    pub computed_at: Timestamp,
}

impl RankingReport {
    /// Assembles a report from an engine evaluation of `matrix`.
    pub fn new(criteria: &CriteriaSet, matrix: &DecisionMatrix, evaluation: Evaluation) -> Self {
        let Evaluation {
            normalized,
            ranking,
            topsis,
        } = evaluation;

        let mut standings: Vec<Standing> = matrix
            .alternatives()
            .iter()
            .zip(ranking.scores.iter().zip(&ranking.ranks))
            .enumerate()
            .map(|(i, (alternative, (&score, &rank)))| Standing {
                rank,
                alternative_number: i + 1,
                label: alternative.label.clone(),
                score,
            })
            .collect();
        standings.sort_by_key(|s| s.rank);

        Self {
            method: ranking.method,
            criteria: criteria.labels().into_iter().map(String::from).collect(),
            alternatives: matrix.alternatives().to_vec(),
            normalized: normalized.rows,
            scores: ranking.scores,
            ranks: ranking.ranks,
            standings,
            topsis,
            computed_at: Timestamp::now(),
        }
    }

    /// The rank-1 entry, if any.
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Returns true if any score is NaN or infinite.
    pub fn has_non_finite_scores(&self) -> bool {
        self.scores.iter().any(|s| !s.is_finite())
    }
}
