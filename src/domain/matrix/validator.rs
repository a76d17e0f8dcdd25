//! Matrix Validator - Shape compatibility checks run before any arithmetic.

use super::{MatrixError, ShapeAxis};

/// Dimension checks between a matrix and its criteria vectors.
///
/// All checks are pure and report the first disagreeing pair.
pub struct MatrixValidator;

impl MatrixValidator {
    /// Matrix column count must equal the number of polarity labels.
    pub fn check_labels(columns: usize, labels: usize) -> Result<(), MatrixError> {
        Self::check_pair(ShapeAxis::MatrixColumns, columns, ShapeAxis::CriteriaLabels, labels)
    }

    /// Matrix column count must equal the number of weights.
    pub fn check_weights(columns: usize, weights: usize) -> Result<(), MatrixError> {
        Self::check_pair(ShapeAxis::MatrixColumns, columns, ShapeAxis::Weights, weights)
    }

    /// A new row must carry exactly one value per criterion.
    pub fn check_row(columns: usize, values: usize) -> Result<(), MatrixError> {
        Self::check_pair(ShapeAxis::MatrixColumns, columns, ShapeAxis::RowValues, values)
    }

    /// Full check for an aggregation request: labels first, then weights.
    pub fn check_aggregation(
        columns: usize,
        labels: usize,
        weights: usize,
    ) -> Result<(), MatrixError> {
        Self::check_labels(columns, labels)?;
        Self::check_weights(columns, weights)
    }

    fn check_pair(
        left: ShapeAxis,
        left_len: usize,
        right: ShapeAxis,
        right_len: usize,
    ) -> Result<(), MatrixError> {
        if left_len != right_len {
            return Err(MatrixError::shape_mismatch(left, left_len, right, right_len));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_shapes_pass() {
        assert!(MatrixValidator::check_aggregation(5, 5, 5).is_ok());
        assert!(MatrixValidator::check_row(3, 3).is_ok());
    }

    #[test]
    fn label_mismatch_is_reported_first() {
        let err = MatrixValidator::check_aggregation(5, 4, 3).unwrap_err();
        assert_eq!(
            err,
            MatrixError::shape_mismatch(ShapeAxis::MatrixColumns, 5, ShapeAxis::CriteriaLabels, 4)
        );
    }

    #[test]
    fn weight_mismatch_is_reported_when_labels_agree() {
        let err = MatrixValidator::check_aggregation(5, 5, 6).unwrap_err();
        assert_eq!(
            err,
            MatrixError::shape_mismatch(ShapeAxis::MatrixColumns, 5, ShapeAxis::Weights, 6)
        );
    }

    #[test]
    fn row_mismatch_names_row_values() {
        match MatrixValidator::check_row(5, 2) {
            Err(MatrixError::ShapeMismatch { right, right_len, .. }) => {
                assert_eq!(right, ShapeAxis::RowValues);
                assert_eq!(right_len, 2);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }
}
