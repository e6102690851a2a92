//! Sample-size estimation and exact pick-probability evaluation.
//!
//! The engine has two stages:
//! 1. [`sample_size`] — a normal-approximation estimate of how many repeated
//!    samples per remaining round separate the correct move from its
//!    competitors at the configured confidence and power.
//! 2. [`pick_probability`] — an exact combinatorial verification of the
//!    probability that the max-total-wins rule then picks the correct move,
//!    by summation over the binomial win-count distribution.
//!
//! [`simulate_pick_rate`] rehearses the same decision procedure with a seeded
//! RNG and is used to validate the exact evaluator.

mod pick;
mod sample_size;
mod simulation;

pub use pick::pick_probability;
pub use sample_size::{sample_size, sample_sizes};
pub use simulation::simulate_pick_rate;
