//! Network cumulative-transfer probe.

use super::Reading;
use crate::core::units::format_megabytes;
use crate::error::{Result, WatchdogError};

const NET_STATS_PATH: &str = "/proc/net/dev";

pub async fn sample() -> Result<Reading> {
    let text = tokio::fs::read_to_string(NET_STATS_PATH)
        .await
        .map_err(|e| WatchdogError::probe(format!("Failed to read {}: {}", NET_STATS_PATH, e)))?;
    Ok(Reading::Size(parse_total_transfer(&text)))
}

/// Sum of received + transmitted byte counters across all interfaces,
/// rendered as megabytes with one decimal.
///
/// The kernel counters are cumulative since boot, so the reported value
/// grows monotonically while the host is up.
fn parse_total_transfer(text: &str) -> String {
    let mut total: u64 = 0;
    for line in text.lines().skip(2) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() > 9 {
            let rx = fields[1].parse::<u64>().unwrap_or(0);
            let tx = fields[9].parse::<u64>().unwrap_or(0);
            total += rx + tx;
        }
    }
    format_megabytes(total)
}
