//! Per-offset sweep and aggregate report.

use serde::{Deserialize, Serialize};

use crate::analysis::{pick_probability, sample_size};
use crate::config::Parameters;

/// Result for a single round offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetReport {
    /// Number of rounds already committed before this decision point.
    pub start: u32,
    /// Required repeated samples per remaining round.
    pub samples: u64,
    /// Exact probability that the decision rule picks the correct move.
    pub probability: f64,
}

/// Full analysis over every offset of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Parameters the analysis was run with.
    pub parameters: Parameters,
    /// One row per offset, in order.
    pub offsets: Vec<OffsetReport>,
    /// Total sample cost: Σ n(s) over all offsets.
    pub total_samples: u64,
    /// Probability that every offset resolves correctly: Π p(s).
    ///
    /// Treats the per-offset correctness events as independent. That is a
    /// modeling simplification of the sequential procedure, not a derived
    /// property.
    pub overall_probability: f64,
}

/// Run the two-stage engine over every offset `0..rounds`.
///
/// For each offset the sample size is estimated first and the exact pick
/// probability verified at that size; the rows are then reduced into the
/// aggregate totals. Deterministic and infallible for validated parameters.
pub fn analyze(params: &Parameters) -> AnalysisReport {
    debug_assert!(params.validate().is_ok(), "parameters out of range");

    let offsets: Vec<OffsetReport> = (0..params.rounds)
        .map(|start| {
            let samples = sample_size(start, params);
            let probability = pick_probability(start, samples, params);
            OffsetReport {
                start,
                samples,
                probability,
            }
        })
        .collect();

    let total_samples = offsets.iter().map(|row| row.samples).sum();
    let overall_probability = offsets.iter().map(|row| row.probability).product();

    AnalysisReport {
        parameters: params.clone(),
        offsets,
        total_samples,
        overall_probability,
    }
}
