//! Default configuration constants.

/// Default confidence level: 1 - α, the likelihood that a Type-I error does
/// not occur. 0.95 means a 5% chance of assuming a move is better when all
/// are equal.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default statistical power: 1 - β, the likelihood that a Type-II error does
/// not occur. 0.90 means a 10% chance of missing the best move when there is
/// one.
pub const DEFAULT_POWER: f64 = 0.90;

/// Default number of rounds in each Rock, Paper, Scissors game.
pub const DEFAULT_ROUNDS: u32 = 20;

/// Default expected win gap between the correct move and its competitors.
///
/// The correct move always scores in its own round and the wrong ones never
/// do, so one extra win per sample is expected.
pub const DEFAULT_DELTA: f64 = 1.0;

/// Default probability of winning a single round against a random opponent.
pub const DEFAULT_WIN_PROB: f64 = 1.0 / 3.0;

/// Default number of simultaneous pairwise comparisons protected by the
/// Bonferroni significance split.
pub const DEFAULT_COMPARISONS: u32 = 3;
