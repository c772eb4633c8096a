//! Line oriented prefix lists.

use super::parse_prefix;
use crate::models::CountedEntry;
use regex::Regex;
use std::error::Error;
use std::sync::OnceLock;

/// Regex splitting a line into prefix, optional count and optional note.
static LINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_line_regex() -> &'static Regex {
    LINE_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<prefix>\S+)(?:\s+(?P<count>\d+))?(?:\s+(?P<note>.*?))?\s*$")
            .expect("Invalid Regex")
    })
}

/// Parse `prefix [count] [note...]` lines.
///
/// Blank lines and lines starting with `#` are skipped. Errors name the
/// 1-based line number.
pub fn parse_text(input: &str, strict: bool) -> Result<Vec<CountedEntry>, Box<dyn Error>> {
    let mut entries = Vec::new();

    for (i, line) in input.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let caps = get_line_regex()
            .captures(trimmed)
            .ok_or_else(|| format!("line {}: cannot parse '{trimmed}'", i + 1))?;
        let prefix = parse_prefix(&caps["prefix"], strict)
            .map_err(|e| format!("line {}: {e}", i + 1))?;
        let count = match caps.name("count") {
            Some(c) => c
                .as_str()
                .parse::<u64>()
                .map_err(|e| format!("line {}: invalid count '{}': {e}", i + 1, c.as_str()))?,
            None => 1,
        };
        let note = caps.name("note").map_or("", |n| n.as_str());

        log::trace!("line {}: {prefix} count={count} note='{note}'", i + 1);
        entries.push(CountedEntry::new(prefix, count, note));
    }

    Ok(entries)
}
