//! Seed cache CLI.
//!
//! Resolves a seed request against a cache file and prints the resolved
//! 64-bit seed in hex, so shell scripts can thread a reproducible seed
//! through repeated runs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use roshambo::seed::{load_or_create, SeedRequest};

#[derive(Parser)]
#[command(
    name = "roshambo-seed",
    about = "Load or create a cached random seed",
    allow_negative_numbers = true
)]
struct Args {
    /// Requested seed value; negative requests a randomly generated seed.
    option: i64,

    /// Path of the cache file.
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match load_or_create(SeedRequest::from_raw(args.option), &args.file) {
        Ok(seed) => {
            println!("0x{seed:08x}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("roshambo-seed: {err}");
            ExitCode::FAILURE
        }
    }
}
