//! Normal-approximation sample-size estimation.

use crate::config::Parameters;
use crate::statistics::normal_quantile;

/// Minimum number of repeated samples per remaining round needed to separate
/// the correct move from its competitors at offset `start`.
///
/// Classical two-sample mean-difference sizing: with a per-comparison
/// significance budget `alpha = (1 - confidence) / comparisons` (Bonferroni
/// split over the simultaneous pairwise comparisons), the per-round
/// multiplier is
///
/// ```text
/// sn = 2 * (z(1 - alpha) + z(power))^2 * prob * (1 - prob) / delta^2
/// ```
///
/// scaled by the `rounds - start - 1` remaining rounds, ceiled, and floored
/// at 1 so the final offset still takes a sample.
///
/// Pure and deterministic; `start` must be below `rounds`.
pub fn sample_size(start: u32, params: &Parameters) -> u64 {
    debug_assert!(start < params.rounds, "offset past the end of the game");

    let alpha = (1.0 - params.confidence) / f64::from(params.comparisons);
    let z1a = normal_quantile(1.0 - alpha);
    let z1b = normal_quantile(params.power);
    let sigma2 = params.prob * (1.0 - params.prob);

    let per_round = 2.0 * (z1a + z1b).powi(2) * sigma2 / params.delta.powi(2);
    let remaining = f64::from(params.rounds - start - 1);

    let n = (remaining * per_round).ceil();
    (n as u64).max(1)
}

/// Sample sizes for every offset `0..rounds`.
pub fn sample_sizes(params: &Parameters) -> Vec<u64> {
    (0..params.rounds).map(|s| sample_size(s, params)).collect()
}
