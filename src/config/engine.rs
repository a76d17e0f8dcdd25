//! Engine configuration: criteria, alternative catalog, input scale

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::error::ValidationError;
use crate::domain::analysis::RankingMethod;
use crate::domain::foundation::{InputScale, Polarity, Weight};
use crate::domain::matrix::{CriteriaSet, Criterion};

/// Tolerance when checking that weights sum to 1.0
pub const WEIGHT_TOTAL_TOLERANCE: f64 = 1e-6;

/// A criterion as written in configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionConfig {
    /// Column label (e.g. "C1")
    pub label: String,

    /// What the criterion measures
    #[serde(default)]
    pub description: Option<String>,

    /// Benefit or cost
    pub polarity: Polarity,

    /// Relative importance in (0, 1]
    pub weight: f64,
}

/// Fixed deployment constants handed to the ranking engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ordered criteria; column j of every matrix row
    #[serde(default = "default_criteria")]
    pub criteria: Vec<CriterionConfig>,

    /// Selectable alternative names
    #[serde(default = "default_alternatives")]
    pub alternatives: Vec<String>,

    /// Rating input scale
    #[serde(default)]
    pub scale: InputScale,

    /// Method used when the caller does not pick one
    #[serde(default)]
    pub method: RankingMethod,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::NoCriteria);
        }

        let mut labels = HashSet::new();
        for criterion in &self.criteria {
            if !labels.insert(criterion.label.as_str()) {
                return Err(ValidationError::DuplicateCriterion(criterion.label.clone()));
            }
            if Weight::try_new(criterion.weight).is_err() {
                return Err(ValidationError::InvalidWeight {
                    label: criterion.label.clone(),
                    weight: criterion.weight,
                });
            }
        }

        if self.alternatives.is_empty() {
            return Err(ValidationError::EmptyCatalog);
        }
        let mut names = HashSet::new();
        for name in &self.alternatives {
            if !names.insert(name.as_str()) {
                return Err(ValidationError::DuplicateAlternative(name.clone()));
            }
        }

        if self.scale.min > self.scale.max {
            return Err(ValidationError::InvalidScale {
                min: self.scale.min,
                max: self.scale.max,
            });
        }
        if !(self.scale.divisor.is_finite() && self.scale.divisor > 0.0) {
            return Err(ValidationError::InvalidScaleDivisor);
        }

        let total = self.weight_total();
        if (total - 1.0).abs() > WEIGHT_TOTAL_TOLERANCE {
            tracing::warn!(total, "Criterion weights do not sum to 1.0");
        }

        Ok(())
    }

    /// Sum of configured weights
    pub fn weight_total(&self) -> f64 {
        self.criteria.iter().map(|c| c.weight).sum()
    }

    /// Build the immutable domain criteria set
    pub fn criteria_set(&self) -> Result<CriteriaSet, ValidationError> {
        let criteria = self
            .criteria
            .iter()
            .map(|c| {
                let weight = Weight::try_new(c.weight).map_err(|_| ValidationError::InvalidWeight {
                    label: c.label.clone(),
                    weight: c.weight,
                })?;
                let criterion = Criterion::new(c.label.clone(), c.polarity, weight);
                Ok(match &c.description {
                    Some(description) => criterion.with_description(description.clone()),
                    None => criterion,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(CriteriaSet::new(criteria)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            criteria: default_criteria(),
            alternatives: default_alternatives(),
            scale: InputScale::default(),
            method: RankingMethod::default(),
        }
    }
}

fn criterion(label: &str, description: &str, polarity: Polarity, weight: f64) -> CriterionConfig {
    CriterionConfig {
        label: label.to_string(),
        description: Some(description.to_string()),
        polarity,
        weight,
    }
}

fn default_criteria() -> Vec<CriterionConfig> {
    vec![
        criterion("C1", "Documentation availability", Polarity::Benefit, 0.3),
        criterion("C2", "User community", Polarity::Benefit, 0.1),
        criterion("C3", "Feature completeness", Polarity::Benefit, 0.3),
        criterion("C4", "Framework update frequency", Polarity::Cost, 0.1),
        criterion("C5", "Performance", Polarity::Benefit, 0.2),
    ]
}

fn default_alternatives() -> Vec<String> {
    [
        "Laravel",
        "Django",
        "Ruby on Rails",
        "Spring Boot",
        "Express",
        "Flask",
        "Koa.js",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.criteria.len(), 5);
        assert_eq!(config.alternatives.len(), 7);
        assert_eq!(config.method, RankingMethod::Saw);
        assert_eq!(config.criteria[3].polarity, Polarity::Cost);
        assert!((config.weight_total() - 1.0).abs() < WEIGHT_TOTAL_TOLERANCE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_criteria_set_matches_config() {
        let set = EngineConfig::default().criteria_set().unwrap();
        assert_eq!(set.labels(), vec!["C1", "C2", "C3", "C4", "C5"]);
        assert_eq!(set.weights(), vec![0.3, 0.1, 0.3, 0.1, 0.2]);
        assert_eq!(
            set.iter().next().unwrap().description.as_deref(),
            Some("Documentation availability")
        );
    }

    #[test]
    fn test_validate_rejects_empty_criteria() {
        let config = EngineConfig {
            criteria: vec![],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NoCriteria));
    }

    #[test]
    fn test_validate_rejects_bad_weight() {
        let mut config = EngineConfig::default();
        config.criteria[1].weight = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWeight { ref label, .. }) if label == "C2"
        ));
        assert!(config.criteria_set().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_criterion() {
        let mut config = EngineConfig::default();
        config.criteria[4].label = "C1".to_string();
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateCriterion("C1".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_catalog_problems() {
        let mut config = EngineConfig {
            alternatives: vec![],
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyCatalog));

        config.alternatives = vec!["Flask".to_string(), "Flask".to_string()];
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateAlternative("Flask".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_scale() {
        let mut config = EngineConfig::default();
        config.scale = InputScale::new(5, 1, 10.0);
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidScale { min: 5, max: 1 })
        );

        config.scale = InputScale::new(1, 5, 0.0);
        assert_eq!(config.validate(), Err(ValidationError::InvalidScaleDivisor));
    }

    #[test]
    fn test_unbalanced_weights_are_allowed() {
        let mut config = EngineConfig::default();
        config.criteria[0].weight = 0.9;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{
            "criteria": [
                {"label": "Speed", "polarity": "benefit", "weight": 0.7},
                {"label": "Price", "polarity": "cost", "weight": 0.3}
            ],
            "alternatives": ["A", "B"],
            "method": "topsis"
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.criteria.len(), 2);
        assert_eq!(config.criteria[1].polarity, Polarity::Cost);
        assert_eq!(config.method, RankingMethod::Topsis);
        assert_eq!(config.scale, InputScale::default());
        assert!(config.validate().is_ok());
    }
}
