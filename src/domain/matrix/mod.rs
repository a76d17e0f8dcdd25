//! Matrix Module - Decision matrix data model and shape validation.
//!
//! # Components
//!
//! - `Criterion` / `CriteriaSet` - Column metadata (label, polarity, weight)
//! - `DecisionMatrix` - Append-only alternatives x criteria raw values
//! - `MatrixValidator` - Dimension checks between matrix, labels and weights

mod criteria;
mod decision_matrix;
mod errors;
mod validator;

pub use criteria::{CriteriaSet, Criterion};
pub use decision_matrix::{Alternative, DecisionMatrix};
pub use errors::{MatrixError, ShapeAxis};
pub use validator::MatrixValidator;
