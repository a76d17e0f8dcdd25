//! Application layer - Session commands and report assembly.
//!
//! This layer sits between a presentation collaborator and the pure
//! domain: it owns the decision matrix, applies catalog and input-scale
//! rules, and turns engine evaluations into reports.

mod report;
mod session;

pub use report::{RankingReport, Standing};
pub use session::{DecisionSession, RatingInput, SessionError, SubmitAlternativeCommand};
