//! Reduce IP prefix lists to the minimal set of CIDR blocks covering the same addresses.
//!
//! The engine lives in [`processing`]; [`models`] holds the prefix and entry
//! types, and [`input`], [`output`] and [`config`] back the command line tool.

pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use models::CountedEntry;
use std::error::Error;
use std::io::Write;

pub use processing::{aggregate, aggregate_prefixes};

/// Read the configured input and aggregate it, adding counts of folded entries.
///
/// Library API for callers that want the entries rather than written output.
pub fn read_and_aggregate(config: &Config) -> Result<Vec<CountedEntry>, Box<dyn Error>> {
    let entries = input::read_entries(config.input.as_deref(), config.input_format, config.strict)?;
    Ok(aggregate(entries, CountedEntry::merge_add_count))
}

/// Input and output sizes of one run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub input_count: usize,
    pub output_count: usize,
}

/// Read, aggregate and write the results to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunStats, Box<dyn Error>> {
    let entries = input::read_entries(config.input.as_deref(), config.input_format, config.strict)?;
    let input_count = entries.len();

    let result = aggregate(entries, CountedEntry::merge_add_count);
    log::info!("Aggregated {} entries into {}", input_count, result.len());

    output::write_entries(out, &result, config.output_format)?;
    Ok(RunStats {
        input_count,
        output_count: result.len(),
    })
}
