//! Terminal report formatting.

use colored::Colorize;

use crate::report::AnalysisReport;

/// Format an analysis report for human-readable terminal output.
///
/// One line per offset plus a `total` line, each carrying the sample size
/// `n`, the total samples across the three candidate moves `3n`, and the pick
/// probability with its complement to nine decimal places.
pub fn format_report(report: &AnalysisReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        "Rock, Paper, Scissors - Probability Analysis".bold()
    ));
    output.push_str(&format!("{}\n", "-".repeat(50).dimmed()));
    output.push_str(&format!(
        "Confidence: {:.2}, Power: {:.2}\n",
        report.parameters.confidence, report.parameters.power
    ));

    for row in &report.offsets {
        let label = format!("s = {:2}", row.start);
        output.push_str(&format_row(&label, row.samples, row.probability));
    }
    output.push_str(&format_row(
        "total",
        report.total_samples,
        report.overall_probability,
    ));

    output
}

fn format_row(label: &str, samples: u64, probability: f64) -> String {
    format!(
        "{:>6}, n = {:4}, 3n = {:4}, p = {:.9}, 1-p = {:.9}\n",
        label,
        samples,
        3 * samples,
        probability,
        1.0 - probability
    )
}
