//! Criteria - Labelled, weighted, polarity-tagged matrix columns.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{Polarity, ValidationError, Weight};

/// A single decision criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub label: String,
    pub description: Option<String>,
    pub polarity: Polarity,
    pub weight: Weight,
}

impl Criterion {
    /// Creates a new criterion.
    pub fn new(label: impl Into<String>, polarity: Polarity, weight: Weight) -> Self {
        Self {
            label: label.into(),
            description: None,
            polarity,
            weight,
        }
    }

    /// Attaches a human-readable description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ordered, immutable set of criteria. Column `j` of a decision matrix
/// corresponds to criterion `j`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Builds a criteria set.
    ///
    /// # Errors
    /// - Empty list
    /// - Blank or duplicate labels
    pub fn new(criteria: Vec<Criterion>) -> Result<Self, ValidationError> {
        if criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }

        let mut seen = HashSet::new();
        for criterion in &criteria {
            if criterion.label.trim().is_empty() {
                return Err(ValidationError::empty_field("criterion.label"));
            }
            if !seen.insert(criterion.label.as_str()) {
                return Err(ValidationError::invalid_format(
                    "criterion.label",
                    format!("duplicate label '{}'", criterion.label),
                ));
            }
        }

        Ok(Self { criteria })
    }

    /// Number of criteria (matrix columns).
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    /// Column labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.label.as_str()).collect()
    }

    /// Polarity vector in column order.
    pub fn polarities(&self) -> Vec<Polarity> {
        self.criteria.iter().map(|c| c.polarity).collect()
    }

    /// Weight vector in column order.
    pub fn weights(&self) -> Vec<f64> {
        self.criteria.iter().map(|c| c.weight.value()).collect()
    }

    /// Sum of all weights. Ranking semantics assume 1.0 but it is not enforced.
    pub fn weight_total(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight.value()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(value: f64) -> Weight {
        Weight::try_new(value).unwrap()
    }

    #[test]
    fn criteria_set_exposes_vectors_in_order() {
        let set = CriteriaSet::new(vec![
            Criterion::new("C1", Polarity::Benefit, w(0.6)),
            Criterion::new("C2", Polarity::Cost, w(0.4)).with_description("Update frequency"),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.labels(), vec!["C1", "C2"]);
        assert_eq!(set.polarities(), vec![Polarity::Benefit, Polarity::Cost]);
        assert_eq!(set.weights(), vec![0.6, 0.4]);
        assert!((set.weight_total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn criteria_set_rejects_empty_list() {
        assert!(CriteriaSet::new(Vec::new()).is_err());
    }

    #[test]
    fn criteria_set_rejects_duplicate_labels() {
        let result = CriteriaSet::new(vec![
            Criterion::new("C1", Polarity::Benefit, w(0.5)),
            Criterion::new("C1", Polarity::Cost, w(0.5)),
        ]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn criteria_set_rejects_blank_label() {
        let result = CriteriaSet::new(vec![Criterion::new("  ", Polarity::Benefit, w(1.0))]);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }
}
