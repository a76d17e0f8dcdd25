//! Ranking result types.

use serde::{Deserialize, Serialize};

use super::{NormalizedMatrix, RankingMethod, TopsisBreakdown};

/// Scores and ranks for every alternative, in matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub method: RankingMethod,
    pub scores: Vec<f64>,
    /// 1 = best.
    pub ranks: Vec<usize>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns true if any score is NaN or infinite.
    ///
    /// Such scores are produced by degenerate inputs and are left in place;
    /// callers decide how to surface them.
    pub fn has_non_finite_scores(&self) -> bool {
        self.scores.iter().any(|s| !s.is_finite())
    }

    /// Row index of the alternative ranked 1.
    pub fn best_index(&self) -> Option<usize> {
        self.ranks.iter().position(|&r| r == 1)
    }
}

/// Full output of one engine pass: the ranking plus what produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub normalized: NormalizedMatrix,
    pub ranking: Ranking,
    /// Present for TOPSIS only.
    pub topsis: Option<TopsisBreakdown>,
}
