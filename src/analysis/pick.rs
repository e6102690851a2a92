//! Exact pick-correctness evaluation.

use crate::config::{Parameters, TieBreak};
use crate::statistics::Binomial;

/// Exact probability that the max-total-wins rule picks the correct move at
/// offset `start`, given `samples` repeated samples per remaining round.
///
/// Over the `rounds - start - 1` remaining rounds the correct move
/// accumulates `t = (rounds - start - 1) * samples` random Bernoulli wins
/// plus `samples` guaranteed ones (it scores in its own round on every
/// sample); each competitor accumulates random wins only. Conditioning on the
/// correct move's random tally `k`:
///
/// - `pmf(k)` is the chance its random tally is exactly `k`;
/// - the competing-move bound is the chance a single competitor stays below
///   the correct total `k + samples`, with ties handled per
///   [`TieBreak`];
/// - both competitors must stay below independently, so the bound enters
///   squared.
///
/// The sum over all `k` is clamped into `[0, 1]` to absorb floating-point
/// overshoot. At `start = rounds - 1` there are no random trials and the
/// result is exactly 1.
pub fn pick_probability(start: u32, samples: u64, params: &Parameters) -> f64 {
    debug_assert!(start < params.rounds, "offset past the end of the game");

    let trials = u64::from(params.rounds - start - 1) * samples;
    let dist = Binomial::new(trials, params.prob);
    let n = samples as i64;

    let mut total = 0.0;
    for k in 0..=trials as i64 {
        let p_correct = dist.pmf(k);
        let p_wrong = match params.tie_break {
            TieBreak::FavorLowest => dist.cdf(k + n - 1) + dist.pmf(k + n) / 3.0,
            TieBreak::Strict => dist.cdf(k + n),
        };
        total += p_correct * p_wrong * p_wrong;
    }

    total.clamp(0.0, 1.0)
}
