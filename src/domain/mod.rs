//! Domain layer containing the ranking model and algorithms.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (polarity, weight, input scale, errors)
//! - `matrix` - Criteria and the append-only decision matrix
//! - `analysis` - Normalization, SAW/TOPSIS aggregation and ranking

pub mod analysis;
pub mod foundation;
pub mod matrix;
