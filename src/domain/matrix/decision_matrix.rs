//! Decision Matrix - Append-only alternatives x criteria table of raw values.

use serde::{Deserialize, Serialize};

use super::{MatrixError, MatrixValidator};

/// One row of the decision matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    /// Free-form label, e.g. a framework name. Labels need not be unique.
    pub label: String,
    /// Raw criterion values in column order.
    pub values: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative row.
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Raw decision matrix. Rows keep insertion order and are never edited
/// or removed once appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    criteria_count: usize,
    alternatives: Vec<Alternative>,
}

impl DecisionMatrix {
    /// Creates an empty matrix with a fixed column count.
    pub fn new(criteria_count: usize) -> Self {
        Self {
            criteria_count,
            alternatives: Vec::new(),
        }
    }

    /// Appends a new alternative.
    ///
    /// The row is validated before the matrix is touched, so a failed
    /// append leaves the stored rows unchanged.
    pub fn append_alternative(
        &mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), MatrixError> {
        MatrixValidator::check_row(self.criteria_count, values.len())?;
        self.alternatives.push(Alternative::new(label, values));
        Ok(())
    }

    /// Number of columns.
    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    /// Number of rows.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns true if no alternative has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Row labels in insertion order.
    pub fn labels(&self) -> Vec<&str> {
        self.alternatives.iter().map(|a| a.label.as_str()).collect()
    }

    /// Raw values as a row-major grid.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.alternatives.iter().map(|a| a.values.clone()).collect()
    }
}
