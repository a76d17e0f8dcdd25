//! DecisionSession - Owns the accumulating decision matrix.
//!
//! A session is the store the presentation layer talks to: it accepts
//! alternatives one at a time and produces a fresh report on request.
//! Submissions take `&mut self` and processing takes `&self`, so a report
//! can never observe a half-appended row.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::RankingReport;
use crate::config::{self, EngineConfig};
use crate::domain::analysis::{RankingEngine, RankingMethod};
use crate::domain::foundation::{InputScale, ValidationError};
use crate::domain::matrix::{DecisionMatrix, MatrixError};

/// Errors returned by session commands.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Unknown alternative: {0}")]
    UnknownAlternative(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Invalid engine configuration: {0}")]
    Config(#[from] config::ValidationError),
}

/// Criterion ratings for a new alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    /// Integer levels on the configured input scale.
    Levels { levels: Vec<u8> },
    /// Raw criterion values, used as given.
    Values { values: Vec<f64> },
}

/// Command to add one alternative to the session matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAlternativeCommand {
    pub label: String,
    #[serde(flatten)]
    pub input: RatingInput,
}

impl SubmitAlternativeCommand {
    pub fn levels(label: impl Into<String>, levels: Vec<u8>) -> Self {
        Self {
            label: label.into(),
            input: RatingInput::Levels { levels },
        }
    }

    pub fn values(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            input: RatingInput::Values { values },
        }
    }
}

/// Decision matrix store plus the engine configured for it.
#[derive(Debug, Clone)]
pub struct DecisionSession {
    engine: RankingEngine,
    catalog: Vec<String>,
    scale: InputScale,
    default_method: RankingMethod,
    matrix: DecisionMatrix,
}

impl DecisionSession {
    /// Creates an empty session from validated engine configuration.
    pub fn new(config: &EngineConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let criteria = config.criteria_set()?;
        let matrix = DecisionMatrix::new(criteria.len());

        Ok(Self {
            engine: RankingEngine::new(criteria),
            catalog: config.alternatives.clone(),
            scale: config.scale,
            default_method: config.method,
            matrix,
        })
    }

    pub fn matrix(&self) -> &DecisionMatrix {
        &self.matrix
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.engine
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn default_method(&self) -> RankingMethod {
        self.default_method
    }

    /// Appends an alternative.
    ///
    /// # Errors
    /// - `UnknownAlternative` if the label is not in the catalog
    /// - `Validation` if a level is outside the input scale
    /// - `Matrix(ShapeMismatch)` if the rating count differs from the
    ///   criteria count
    ///
    /// On error the stored matrix is unchanged.
    pub fn submit(&mut self, cmd: SubmitAlternativeCommand) -> Result<(), SessionError> {
        if !self.catalog.iter().any(|name| *name == cmd.label) {
            return Err(SessionError::UnknownAlternative(cmd.label));
        }

        let values = match cmd.input {
            RatingInput::Levels { levels } => self.scale.convert(&levels)?,
            RatingInput::Values { values } => values,
        };

        self.matrix.append_alternative(cmd.label.clone(), values)?;

        info!(
            label = %cmd.label,
            alternatives = self.matrix.alternative_count(),
            "Alternative added to decision matrix"
        );

        Ok(())
    }

    /// Shorthand for submitting scale levels.
    pub fn submit_levels(
        &mut self,
        label: impl Into<String>,
        levels: Vec<u8>,
    ) -> Result<(), SessionError> {
        self.submit(SubmitAlternativeCommand::levels(label, levels))
    }

    /// Shorthand for submitting raw values.
    pub fn submit_values(
        &mut self,
        label: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<(), SessionError> {
        self.submit(SubmitAlternativeCommand::values(label, values))
    }

    /// Ranks the current matrix with `method`, or the configured default.
    pub fn process(&self, method: Option<RankingMethod>) -> Result<RankingReport, SessionError> {
        let method = method.unwrap_or(self.default_method);
        let evaluation = self.engine.evaluate(&self.matrix, method)?;
        Ok(RankingReport::new(self.engine.criteria(), &self.matrix, evaluation))
    }
}
