//! Report generator for the adaptive solver's statistical design.
//!
//! Prints one line per round offset with the required sample size and the
//! exact probability of a correct pick, plus the aggregate totals. Purely
//! computational; always exits 0.

use clap::Parser;

use roshambo::output::{format_report, to_json_pretty};
use roshambo::{analyze, Parameters};

#[derive(Parser)]
#[command(name = "roshambo", about = "Probability analysis for the adaptive solver")]
struct Args {
    /// Use the two-sided parameterization (significance split over two
    /// comparisons, strict tie handling) instead of the default three-way
    /// split with one-third tie credit.
    #[arg(long)]
    two_sided: bool,

    /// Emit the report as JSON instead of the formatted table.
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let params = if args.two_sided {
        Parameters::two_sided()
    } else {
        Parameters::default()
    };

    let report = analyze(&params);
    if args.json {
        match to_json_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("roshambo: {err}"),
        }
    } else {
        print!("{}", format_report(&report));
    }
}
