//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the ranking domain.

mod errors;
mod polarity;
mod scale;
mod timestamp;
mod weight;

pub use errors::ValidationError;
pub use polarity::Polarity;
pub use scale::{InputScale, ScaleLevel};
pub use timestamp::Timestamp;
pub use weight::Weight;
