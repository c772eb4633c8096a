//! Reading prefix lists for the command line tool.
//!
//! - [`text`] - One `prefix [count] [note]` entry per line
//! - [`json`] - An array of `{"prefix", "count", "note"}` objects

mod json;
mod text;

use crate::models::{CountedEntry, Prefix, PrefixError};
use std::error::Error;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

pub use json::parse_json;
pub use text::parse_text;

/// Layout of the input data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    #[value(alias = "txt")]
    Text,
    Json,
}

impl InputFormat {
    /// Guess the format from a file name: `.json` is JSON, anything else is text.
    pub fn from_path(path: Option<&str>) -> InputFormat {
        match path.and_then(|p| Path::new(p).extension()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(InputFormat::Text),
            "json" => Ok(InputFormat::Json),
            other => Err(format!("unknown input format '{other}', expected text or json")),
        }
    }
}

/// Parse a prefix, masking host bits instead of failing when `strict` is off.
pub fn parse_prefix(raw: &str, strict: bool) -> Result<Prefix, PrefixError> {
    match Prefix::parse(raw) {
        Err(PrefixError::HostBitsSet(_)) if !strict => {
            let prefix = Prefix::parse_truncating(raw)?;
            log::warn!("Masked host bits: {raw} -> {prefix}");
            Ok(prefix)
        }
        other => other,
    }
}

/// Read the whole input from a file, or from stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&str>) -> Result<String, Box<dyn Error>> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Error reading stdin: {e}"))?;
            log::info!("Read {} bytes from stdin", buf.len());
            Ok(buf)
        }
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Input file does not exist: {file}").into());
            }
            log::info!("Reading prefixes from file: {file}");
            let data = std::fs::read_to_string(file)
                .map_err(|e| format!("Error reading input file {file}: {e}"))?;
            Ok(data)
        }
    }
}

/// Read and parse entries.
///
/// # Arguments
/// * `path` - Input file, `None` or `-` for stdin
/// * `format` - Input layout, guessed from the file name when `None`
/// * `strict` - Reject prefixes with host bits set instead of masking them
pub fn read_entries(
    path: Option<&str>,
    format: Option<InputFormat>,
    strict: bool,
) -> Result<Vec<CountedEntry>, Box<dyn Error>> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let data = read_input(path)?;
    let entries = match format {
        InputFormat::Text => parse_text(&data, strict)?,
        InputFormat::Json => parse_json(&data, strict)?,
    };
    log::info!("Parsed {} entries ({:?})", entries.len(), format);
    Ok(entries)
}
