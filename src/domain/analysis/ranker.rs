//! Ranker - Dense ordinal ranks from a score vector.

use std::cmp::Ordering;

/// Converts scores into ranks, 1 = best.
pub struct Ranker;

impl Ranker {
    /// Ranks scores in descending order.
    ///
    /// # Algorithm
    /// Double argsort: sort indices by ascending score (stable), take each
    /// index's position in that order, then `rank = N - position`.
    ///
    /// # Edge Cases
    /// - Exact ties keep original index order in the ascending sort, so the
    ///   earlier alternative receives the numerically larger rank.
    /// - NaN sorts above every number, so NaN scores take the best ranks.
    /// - Empty input: returns empty Vec
    pub fn rank(scores: &[f64]) -> Vec<usize> {
        let n = scores.len();
        let order = Self::argsort(scores);

        let mut positions = vec![0usize; n];
        for (position, &index) in order.iter().enumerate() {
            positions[index] = position;
        }

        positions.into_iter().map(|position| n - position).collect()
    }

    /// Stable ascending argsort with NaN placed last.
    pub fn argsort(scores: &[f64]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..scores.len()).collect();
        indices.sort_by(|&a, &b| nan_last(scores[a], scores[b]));
        indices
    }
}

fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
