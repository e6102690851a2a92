//! Configuration for the sample-size estimator and pick evaluator.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMPARISONS, DEFAULT_CONFIDENCE, DEFAULT_DELTA, DEFAULT_POWER, DEFAULT_ROUNDS,
    DEFAULT_WIN_PROB,
};

/// How the competing-move bound treats a tally tied with the correct move.
///
/// Two formulations of the bound were in production use; they are numerically
/// different and therefore selected explicitly instead of reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// A competing move that exactly ties the correct total still loses the
    /// pick one third of the time, reflecting a decision rule that favors the
    /// lowest-indexed move on draws. The bound is
    /// `cdf(k + n - 1) + pmf(k + n) / 3`.
    #[default]
    FavorLowest,

    /// All ties go to the correct move: the bound is the plain `cdf(k + n)`,
    /// i.e. a competitor only wins by strictly exceeding the correct total.
    Strict,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TieBreak::FavorLowest => write!(f, "favor-lowest (one-third tie credit)"),
            TieBreak::Strict => write!(f, "strict (ties go to the correct move)"),
        }
    }
}

/// Statistical parameters for the adaptive solver analysis.
///
/// All computations take the parameters by reference; nothing mutates them
/// after construction. The defaults reproduce the reference parameterization
/// (three-way Bonferroni split, tie-aware bound). [`Parameters::two_sided`]
/// reproduces the second observed parameterization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Confidence level: 1 - α, the target bound on the Type-I error rate.
    ///
    /// Must be in (0, 1). Default: 0.95.
    pub confidence: f64,

    /// Statistical power: 1 - β, the target bound on the Type-II error rate.
    ///
    /// Must be in (0, 1). Default: 0.90.
    pub power: f64,

    /// Number of rounds in each game.
    ///
    /// Offsets range over `0..rounds`. Must be positive. Default: 20.
    pub rounds: u32,

    /// Expected win gap between the correct move and each competitor,
    /// per sampled game.
    ///
    /// Must be positive. Default: 1.
    pub delta: f64,

    /// Probability of winning a single round against a random continuation.
    ///
    /// Must be in (0, 1). Default: 1/3.
    pub prob: f64,

    /// Number of simultaneous pairwise comparisons the Bonferroni split
    /// protects against false positives.
    ///
    /// The per-comparison significance budget is `(1 - confidence) /
    /// comparisons`. The two observed parameterizations use 3 and 2. Must be
    /// positive. Default: 3.
    pub comparisons: u32,

    /// Tie handling in the competing-move bound of the exact evaluator.
    pub tie_break: TieBreak,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            power: DEFAULT_POWER,
            rounds: DEFAULT_ROUNDS,
            delta: DEFAULT_DELTA,
            prob: DEFAULT_WIN_PROB,
            comparisons: DEFAULT_COMPARISONS,
            tie_break: TieBreak::FavorLowest,
        }
    }
}

impl Parameters {
    /// The second observed parameterization: a classical two-sided test with
    /// the significance budget split over two comparisons and the strict
    /// competing-move bound.
    pub fn two_sided() -> Self {
        Self {
            comparisons: 2,
            tie_break: TieBreak::Strict,
            ..Self::default()
        }
    }

    /// Set the confidence level.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the statistical power.
    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    /// Set the number of rounds per game.
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), String> {
        if self.confidence <= 0.0 || self.confidence >= 1.0 {
            return Err("confidence must be in (0, 1)".to_string());
        }
        if self.power <= 0.0 || self.power >= 1.0 {
            return Err("power must be in (0, 1)".to_string());
        }
        if self.rounds == 0 {
            return Err("rounds must be positive".to_string());
        }
        if self.delta <= 0.0 {
            return Err("delta must be positive".to_string());
        }
        if self.prob <= 0.0 || self.prob >= 1.0 {
            return Err("prob must be in (0, 1)".to_string());
        }
        if self.comparisons == 0 {
            return Err("comparisons must be positive".to_string());
        }
        Ok(())
    }
}
