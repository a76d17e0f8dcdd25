//! Normalizer - Maps raw criterion values onto a comparable scale.
//!
//! Two schemes are supported and they are deliberately not unified:
//!
//! - [`NormalizationScheme::PerRowMinMax`] scales each alternative against
//!   the spread of its *own* criterion values, not against other
//!   alternatives.
//! - [`NormalizationScheme::PerColumnVector`] divides benefit values by the
//!   Euclidean norm of their column and replaces cost values with
//!   `min(column) / value`.
//!
//! Both share the same degenerate fallback: a row whose values are all
//! equal normalizes to `1.0` everywhere, whatever the polarities say.
//! Non-finite results (division by zero, NaN inputs) are returned as is.

use serde::{Deserialize, Serialize};

use super::numeric::{column, nan_max, nan_min};
use super::NormalizationScheme;
use crate::domain::foundation::Polarity;
use crate::domain::matrix::{DecisionMatrix, MatrixError, MatrixValidator};

/// Amount subtracted from a row minimum so the smallest value does not
/// normalize to zero.
pub const MIN_NUDGE: f64 = 0.01;

/// Output of a normalization pass. Same shape as the source matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMatrix {
    pub scheme: NormalizationScheme,
    pub columns: usize,
    pub rows: Vec<Vec<f64>>,
}

/// Normalization functions.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a decision matrix under the given scheme.
    ///
    /// # Errors
    /// `ShapeMismatch` if the polarity count differs from the column count.
    pub fn normalize(
        matrix: &DecisionMatrix,
        polarities: &[Polarity],
        scheme: NormalizationScheme,
    ) -> Result<NormalizedMatrix, MatrixError> {
        MatrixValidator::check_labels(matrix.criteria_count(), polarities.len())?;

        let raw = matrix.rows();
        let rows = match scheme {
            NormalizationScheme::PerRowMinMax => raw
                .iter()
                .map(|row| Self::min_max_row(row, polarities))
                .collect::<Result<_, _>>()?,
            NormalizationScheme::PerColumnVector => Self::vector_columns(&raw, polarities),
        };

        Ok(NormalizedMatrix {
            scheme,
            columns: matrix.criteria_count(),
            rows,
        })
    }

    /// Linear min-max over a single row.
    ///
    /// # Algorithm
    /// - `max == min`: every entry is 1.0
    /// - otherwise `min' = min - MIN_NUDGE` and
    ///   - benefit: `(v - min') / (max - min')`
    ///   - cost: `(min' - v) / (min' - max)`
    ///
    /// # Errors
    /// `ShapeMismatch` if the polarity count differs from the row length.
    pub fn min_max_row(row: &[f64], polarities: &[Polarity]) -> Result<Vec<f64>, MatrixError> {
        MatrixValidator::check_labels(row.len(), polarities.len())?;

        let max = nan_max(row.iter().copied());
        let min = nan_min(row.iter().copied());

        if max == min {
            return Ok(vec![1.0; row.len()]);
        }

        let min = min - MIN_NUDGE;
        Ok(row
            .iter()
            .zip(polarities)
            .map(|(&v, polarity)| match polarity {
                Polarity::Benefit => (v - min) / (max - min),
                Polarity::Cost => (min - v) / (min - max),
            })
            .collect())
    }

    /// Column-wise vector normalization with the row-level degenerate fallback.
    fn vector_columns(rows: &[Vec<f64>], polarities: &[Polarity]) -> Vec<Vec<f64>> {
        let norms: Vec<f64> = (0..polarities.len())
            .map(|j| column(rows, j).map(|v| v * v).sum::<f64>().sqrt())
            .collect();
        let minimums: Vec<f64> = (0..polarities.len())
            .map(|j| nan_min(column(rows, j)))
            .collect();

        rows.iter()
            .map(|row| {
                let max = nan_max(row.iter().copied());
                let min = nan_min(row.iter().copied());
                if max == min {
                    return vec![1.0; row.len()];
                }

                row.iter()
                    .zip(polarities)
                    .zip(norms.iter().zip(&minimums))
                    .map(|((&v, polarity), (&norm, &col_min))| match polarity {
                        Polarity::Benefit => v / norm,
                        Polarity::Cost => col_min / v,
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matrix::ShapeAxis;
    use proptest::prelude::*;

    const B: Polarity = Polarity::Benefit;
    const C: Polarity = Polarity::Cost;

    fn matrix(rows: Vec<Vec<f64>>) -> DecisionMatrix {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut m = DecisionMatrix::new(width);
        for (i, row) in rows.into_iter().enumerate() {
            m.append_alternative(format!("A{}", i + 1), row).unwrap();
        }
        m
    }

    // Per-row min-max

    #[test]
    fn min_max_equal_row_is_all_ones() {
        let normed = Normalizer::min_max_row(&[0.2, 0.2, 0.2, 0.2, 0.2], &[B, B, B, C, B]).unwrap();
        assert_eq!(normed, vec![1.0; 5]);
    }

    #[test]
    fn min_max_applies_nudged_formula() {
        let normed = Normalizer::min_max_row(&[0.1, 0.3, 0.5], &[B, B, C]).unwrap();

        let max = 0.5;
        let min = 0.1 - MIN_NUDGE;
        assert_eq!(normed[0], (0.1 - min) / (max - min));
        assert_eq!(normed[1], (0.3 - min) / (max - min));
        assert_eq!(normed[2], (min - 0.5) / (min - max));

        assert!((normed[0] - 0.01 / 0.41).abs() < 1e-12);
        assert!((normed[1] - 0.21 / 0.41).abs() < 1e-12);
        assert!((normed[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn min_max_is_relative_to_own_row_only() {
        let m = matrix(vec![vec![0.1, 0.5], vec![0.3, 0.4]]);
        let normed = Normalizer::normalize(&m, &[B, B], NormalizationScheme::PerRowMinMax).unwrap();

        // Each row's maximum maps to 1.0 regardless of the other row.
        assert_eq!(normed.rows[0][1], 1.0);
        assert_eq!(normed.rows[1][1], 1.0);
    }

    #[test]
    fn min_max_propagates_nan() {
        let normed = Normalizer::min_max_row(&[0.1, f64::NAN, 0.5], &[B, B, B]).unwrap();
        assert!(normed.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn min_max_rejects_short_polarity_slice() {
        let err = Normalizer::min_max_row(&[0.1, 0.3, 0.5], &[B]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::shape_mismatch(ShapeAxis::MatrixColumns, 3, ShapeAxis::CriteriaLabels, 1)
        );
    }

    #[test]
    fn min_max_rejects_long_polarity_slice() {
        let err = Normalizer::min_max_row(&[0.1, 0.3], &[B, C, B]).unwrap_err();
        assert!(err.is_shape_mismatch());
    }

    // Per-column vector

    #[test]
    fn vector_benefit_divides_by_column_norm() {
        let m = matrix(vec![vec![3.0, 1.0], vec![4.0, 2.0]]);
        let normed = Normalizer::normalize(&m, &[B, B], NormalizationScheme::PerColumnVector).unwrap();

        assert!((normed.rows[0][0] - 0.6).abs() < 1e-12);
        assert!((normed.rows[1][0] - 0.8).abs() < 1e-12);
        let norm = 5.0f64.sqrt();
        assert!((normed.rows[0][1] - 1.0 / norm).abs() < 1e-12);
        assert!((normed.rows[1][1] - 2.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn vector_cost_is_column_minimum_over_value() {
        let m = matrix(vec![vec![0.3, 0.2], vec![0.1, 0.4]]);
        let normed = Normalizer::normalize(&m, &[B, C], NormalizationScheme::PerColumnVector).unwrap();

        assert_eq!(normed.rows[0][1], 0.2 / 0.2);
        assert_eq!(normed.rows[1][1], 0.2 / 0.4);
    }

    #[test]
    fn vector_uses_row_degenerate_fallback() {
        let m = matrix(vec![vec![0.5, 0.5, 0.5], vec![0.1, 0.2, 0.3]]);
        let normed =
            Normalizer::normalize(&m, &[B, C, B], NormalizationScheme::PerColumnVector).unwrap();

        assert_eq!(normed.rows[0], vec![1.0, 1.0, 1.0]);
        assert_ne!(normed.rows[1][0], 1.0);
    }

    #[test]
    fn vector_cost_with_zero_value_is_not_clamped() {
        let m = matrix(vec![vec![0.3, 0.0], vec![0.1, 0.4]]);
        let normed = Normalizer::normalize(&m, &[B, C], NormalizationScheme::PerColumnVector).unwrap();

        // 0 / 0 for the row holding the minimum itself
        assert!(normed.rows[0][1].is_nan());
        assert_eq!(normed.rows[1][1], 0.0);
    }

    #[test]
    fn label_count_mismatch_is_rejected() {
        let m = matrix(vec![vec![0.1, 0.2, 0.3]]);
        let err = Normalizer::normalize(&m, &[B, B], NormalizationScheme::PerRowMinMax).unwrap_err();
        assert_eq!(
            err,
            MatrixError::shape_mismatch(ShapeAxis::MatrixColumns, 3, ShapeAxis::CriteriaLabels, 2)
        );
    }

    #[test]
    fn normalized_matrix_keeps_shape() {
        let m = matrix(vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.5]]);
        for scheme in [NormalizationScheme::PerRowMinMax, NormalizationScheme::PerColumnVector] {
            let normed = Normalizer::normalize(&m, &[B, C], scheme).unwrap();
            assert_eq!(normed.scheme, scheme);
            assert_eq!(normed.rows.len(), 3);
            assert!(normed.rows.iter().all(|r| r.len() == 2));
        }
    }

    proptest! {
        #[test]
        fn min_max_degenerate_rows_are_all_ones(
            value in 0.1f64..0.5,
            width in 1usize..8,
            costs in prop::collection::vec(any::<bool>(), 8),
        ) {
            let polarities: Vec<Polarity> = costs[..width]
                .iter()
                .map(|&c| if c { C } else { B })
                .collect();
            let normed = Normalizer::min_max_row(&vec![value; width], &polarities).unwrap();
            prop_assert_eq!(normed, vec![1.0; width]);
        }

        #[test]
        fn min_max_values_stay_in_unit_interval(
            row in prop::collection::vec(0.1f64..0.5, 2..8),
            costs in prop::collection::vec(any::<bool>(), 8),
        ) {
            let polarities: Vec<Polarity> = costs[..row.len()]
                .iter()
                .map(|&c| if c { C } else { B })
                .collect();
            for v in Normalizer::min_max_row(&row, &polarities).unwrap() {
                prop_assert!(v > 0.0 && v <= 1.0 + 1e-12, "out of range: {}", v);
            }
        }
    }
}
