//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;
use std::time::Duration;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string().replace('"', "\"\"");
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// One line describing how far a run reduced its input.
pub fn format_summary(input_count: usize, output_count: usize, elapsed: Duration) -> String {
    let removed = input_count.saturating_sub(output_count);
    format!(
        "{label} {input_count} prefixes -> {output} prefixes ({removed} folded) in {ms:.3} ms",
        label = "aggregated".on_blue(),
        output = output_count.to_string().green(),
        ms = elapsed.as_secs_f64() * 1000.0,
    )
}

/// Print the run summary to stderr, keeping stdout for the results.
pub fn print_summary(input_count: usize, output_count: usize, elapsed: Duration) {
    eprintln!("{}", format_summary(input_count, output_count, elapsed));
}
