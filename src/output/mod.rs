//! Output formatting for aggregated entries.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - CSV and plain output formatting
//! - [`terminal`] - Terminal output with colors

mod csv;
mod terminal;

use crate::models::CountedEntry;
use std::error::Error;
use std::io::Write;
use std::str::FromStr;

pub use csv::{write_csv, write_plain};
pub use terminal::{format_field, format_summary, print_summary};

/// Layout of the written results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    #[value(alias = "text")]
    Plain,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "plain" | "text" => Ok(OutputFormat::Plain),
            other => Err(format!("unknown output format '{other}', expected csv or plain")),
        }
    }
}

/// Write entries in the requested format.
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[CountedEntry],
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    log::debug!("write_entries: {} entries as {:?}", entries.len(), format);
    match format {
        OutputFormat::Csv => write_csv(out, entries),
        OutputFormat::Plain => write_plain(out, entries),
    }
}
