//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("No criteria configured")]
    NoCriteria,

    #[error("Weight for criterion '{label}' must be in (0, 1], got {weight}")]
    InvalidWeight { label: String, weight: f64 },

    #[error("Duplicate criterion label: {0}")]
    DuplicateCriterion(String),

    #[error("Alternative catalog is empty")]
    EmptyCatalog,

    #[error("Duplicate alternative in catalog: {0}")]
    DuplicateAlternative(String),

    #[error("Invalid input scale: min {min} must not exceed max {max}")]
    InvalidScale { min: u8, max: u8 },

    #[error("Input scale divisor must be a positive finite number")]
    InvalidScaleDivisor,

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(#[from] crate::domain::foundation::ValidationError),
}
