//! # roshambo
//!
//! Statistical design analysis for an adaptive Rock-Paper-Scissors solver.
//!
//! The solver commits to one position at a time: after `s` of `rounds`
//! positions are fixed, it replays the remaining rounds against random
//! continuations and keeps the move with the highest total win count. This
//! crate answers the two questions that design raises:
//!
//! - How many repeated samples `n(s)` per remaining round are needed so the
//!   max-total-wins rule separates the correct move from its competitors at a
//!   target confidence and power?
//! - Given that `n(s)`, what is the *exact* probability that the rule picks
//!   the correct move, computed by summing over the binomial distribution of
//!   win counts rather than by approximation?
//!
//! ## Quick Start
//!
//! ```
//! use roshambo::{analyze, Parameters};
//!
//! let report = analyze(&Parameters::default());
//! for row in &report.offsets {
//!     println!("s = {:2}: n = {}, p = {:.9}", row.start, row.samples, row.probability);
//! }
//! println!("total: n = {}, p = {:.9}", report.total_samples, report.overall_probability);
//! ```
//!
//! Two parameterizations of the decision rule were in production use; both are
//! exposed as explicit configurations rather than reconciled silently. See
//! [`Parameters::default`] and [`Parameters::two_sided`].

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod report;

// Functional modules
pub mod analysis;
pub mod output;
pub mod seed;
pub mod statistics;

// Re-exports for public API
pub use config::{Parameters, TieBreak};
pub use constants::{
    DEFAULT_COMPARISONS, DEFAULT_CONFIDENCE, DEFAULT_DELTA, DEFAULT_POWER, DEFAULT_ROUNDS,
    DEFAULT_WIN_PROB,
};
pub use report::{analyze, AnalysisReport, OffsetReport};
