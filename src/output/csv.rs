//! CSV and plain output for aggregated entries.

use super::terminal::format_field;
use crate::models::CountedEntry;
use itertools::Itertools;
use std::error::Error;
use std::io::Write;

/// Write entries as quoted, right-aligned CSV with a timestamp comment first.
pub fn write_csv<W: Write>(out: &mut W, entries: &[CountedEntry]) -> Result<(), Box<dyn Error>> {
    writeln!(
        out,
        "# cidr-aggregate {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S %z")
    )?;
    writeln!(out, "{}", row("prefix", "count", "note"))?;
    for entry in entries {
        writeln!(out, "{}", csv_row(entry))?;
    }
    Ok(())
}

/// Write one prefix per line.
pub fn write_plain<W: Write>(out: &mut W, entries: &[CountedEntry]) -> Result<(), Box<dyn Error>> {
    for entry in entries {
        writeln!(out, "{}", entry.prefix)?;
    }
    Ok(())
}

/// Format a single CSV row.
fn csv_row(entry: &CountedEntry) -> String {
    row(entry.prefix, entry.count, &entry.note)
}

fn row<P: ToString, C: ToString, N: ToString>(prefix: P, count: C, note: N) -> String {
    [
        format_field(prefix, 20),
        format_field(count, 10),
        format_field(note, 18),
    ]
    .iter()
    .join(",")
}
