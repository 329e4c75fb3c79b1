//! Size-string parsing for constraint comparison.
//!
//! Readings and limits for size-based resources arrive as human-readable
//! strings ("2.0G", "500MB"). Both sides of a comparison are normalized to
//! the same kilobyte scale so relative ordering is correct regardless of the
//! unit each side was written in.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*([KMG])B?\s*$").expect("valid size regex"));

/// Parse a human-readable size string into a kilobyte-scale number.
///
/// `K`/`KB` is the base unit, `M`/`MB` multiplies by 1024 and `G`/`GB` by
/// 1024 * 1024, case-insensitively. The bare-letter forms cover `df -h`
/// output. Returns `None` for anything that does not match; callers must
/// treat that as non-comparable, never as zero.
pub fn parse_size(value: &str) -> Option<f64> {
    let caps = SIZE_RE.captures(value)?;
    let number: f64 = caps[1].parse().ok()?;
    let multiplier = match caps[2].to_ascii_uppercase().as_str() {
        "K" => 1.0,
        "M" => 1024.0,
        "G" => 1024.0 * 1024.0,
        _ => return None,
    };
    Some(number * multiplier)
}

/// Render a byte count as megabytes with one decimal, e.g. "1243.7MB".
/// The output parses back through [`parse_size`].
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / 1024.0 / 1024.0)
}
