//! Matrix error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One side of a dimension comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeAxis {
    /// Number of criterion columns in the decision matrix.
    MatrixColumns,
    /// Number of criterion polarity labels.
    CriteriaLabels,
    /// Number of criterion weights.
    Weights,
    /// Number of values supplied for a new alternative.
    RowValues,
}

impl fmt::Display for ShapeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeAxis::MatrixColumns => "matrix columns",
            ShapeAxis::CriteriaLabels => "criteria labels",
            ShapeAxis::Weights => "weights",
            ShapeAxis::RowValues => "row values",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by matrix construction and ranking computations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("Shape mismatch: {left} has {left_len} entries but {right} has {right_len}")]
    ShapeMismatch {
        left: ShapeAxis,
        left_len: usize,
        right: ShapeAxis,
        right_len: usize,
    },

    #[error("Decision matrix has no alternatives")]
    EmptyMatrix,
}

impl MatrixError {
    /// Creates a shape mismatch error for the given pair.
    pub fn shape_mismatch(
        left: ShapeAxis,
        left_len: usize,
        right: ShapeAxis,
        right_len: usize,
    ) -> Self {
        MatrixError::ShapeMismatch {
            left,
            left_len,
            right,
            right_len,
        }
    }

    /// Returns true if this is a shape mismatch.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, MatrixError::ShapeMismatch { .. })
    }
}
