//! MCDA Ranker - Multi-criteria decision ranking
//!
//! This crate ranks a set of alternatives against weighted benefit and cost
//! criteria using Simple Additive Weighting (SAW) or TOPSIS.
//!
//! - [`domain`] holds the pure scoring engine and its value objects
//! - [`application`] owns the accumulating decision matrix and builds reports
//! - [`config`] loads criteria, catalog and logging settings

pub mod application;
pub mod config;
pub mod domain;
