//! Analysis Module - Pure decision-matrix ranking services.
//!
//! # Components
//!
//! - `Normalizer` - Per-row min-max (SAW) or per-column vector (TOPSIS) scaling
//! - `SawAggregator` - Weighted sum of normalized values
//! - `TopsisAggregator` - Relative closeness to the positive/negative ideal
//! - `Ranker` - Dense ordinal ranks via double argsort
//! - `RankingEngine` - Validator → Normalizer → Aggregator → Ranker
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless. Degenerate numeric results
//! (NaN, ∞) are returned to the caller rather than clamped or replaced.

mod engine;
mod method;
mod normalizer;
mod numeric;
mod ranker;
mod ranking;
mod saw;
mod topsis;

pub use engine::{compute_saw, compute_topsis, evaluate, RankingEngine};
pub use method::{NormalizationScheme, RankingMethod};
pub use normalizer::{NormalizedMatrix, Normalizer, MIN_NUDGE};
pub use ranker::Ranker;
pub use ranking::{Evaluation, Ranking};
pub use saw::SawAggregator;
pub use topsis::{TopsisAggregator, TopsisBreakdown};
