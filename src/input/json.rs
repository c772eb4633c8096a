//! JSON prefix lists.

use super::parse_prefix;
use crate::models::CountedEntry;
use serde::Deserialize;
use std::error::Error;

/// Entry as written in the file, before the prefix is validated.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct RawEntry {
    prefix: String,
    count: Option<u64>,
    #[serde(default)]
    note: String,
}

/// Parse a JSON array of `{"prefix": "...", "count": n, "note": "..."}` objects.
///
/// `count` defaults to 1 and `note` to empty. Decoding errors report the JSON
/// path of the offending value.
pub fn parse_json(input: &str, strict: bool) -> Result<Vec<CountedEntry>, Box<dyn Error>> {
    let de = &mut serde_json::Deserializer::from_str(input);
    let raw: Vec<RawEntry> = serde_path_to_error::deserialize(de)
        .map_err(|e| format!("Error parsing JSON input at {}: {}", e.path(), e.inner()))?;

    raw.into_iter()
        .enumerate()
        .map(|(i, r)| -> Result<CountedEntry, Box<dyn Error>> {
            let prefix = parse_prefix(&r.prefix, strict).map_err(|e| format!("[{i}].prefix: {e}"))?;
            Ok(CountedEntry {
                prefix,
                count: r.count.unwrap_or(1),
                note: r.note,
            })
        })
        .collect()
}
