//! Monte Carlo rehearsal of the decision procedure.
//!
//! The exact evaluator is a closed-form sum; this module plays out the same
//! procedure with a seeded RNG so the two can be checked against each other.
//! With [`TieBreak::Strict`] the simulated decision matches the analytic
//! bound event-for-event; with [`TieBreak::FavorLowest`] the analytic
//! tie-credit term is itself an approximation of the lowest-index rule, so
//! agreement is close but not exact.

use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, Distribution};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{Parameters, TieBreak};

/// Fraction of simulated games in which the max-total-wins rule picks the
/// correct move at offset `start` with `samples` repeated samples per
/// remaining round.
///
/// Each game draws the random win tallies of the correct move and its two
/// competitors from the binomial distribution of `(rounds - start - 1) *
/// samples` trials, credits the correct move its `samples` guaranteed wins,
/// and applies the configured tie rule. Deterministic for a fixed `seed`.
pub fn simulate_pick_rate(
    start: u32,
    samples: u64,
    params: &Parameters,
    games: u32,
    seed: u64,
) -> f64 {
    debug_assert!(start < params.rounds, "offset past the end of the game");
    debug_assert!(games > 0, "at least one simulated game required");

    let trials = u64::from(params.rounds - start - 1) * samples;
    let wins = Binomial::new(trials, params.prob).expect("validated win probability");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    let mut correct_picks = 0u32;
    for _ in 0..games {
        let correct_total = samples + wins.sample(&mut rng);
        let rival_a = wins.sample(&mut rng);
        let rival_b = wins.sample(&mut rng);

        let picked = match params.tie_break {
            // Ties all credited to the correct move.
            TieBreak::Strict => correct_total >= rival_a && correct_total >= rival_b,
            // Lowest-indexed move wins draws; the correct move lands on a
            // uniformly random index, so play that placement out.
            TieBreak::FavorLowest => {
                let slot = rng.random_range(0..3usize);
                let mut totals = [0u64; 3];
                totals[slot] = correct_total;
                let mut rivals = [rival_a, rival_b].into_iter();
                for (i, total) in totals.iter_mut().enumerate() {
                    if i != slot {
                        *total = rivals.next().unwrap_or(0);
                    }
                }
                let mut winner = 0;
                for i in 1..3 {
                    if totals[i] > totals[winner] {
                        winner = i;
                    }
                }
                winner == slot
            }
        };

        if picked {
            correct_picks += 1;
        }
    }

    f64::from(correct_picks) / f64::from(games)
}
