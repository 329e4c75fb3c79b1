//! RAM used-percentage probe.

use std::time::Duration;

use super::shell::run_command;
use super::Reading;
use crate::error::{Result, WatchdogError};

const MEMORY_SUMMARY_CMD: &str = "free -m";

pub async fn sample(limit: Duration) -> Result<Reading> {
    let text = run_command(MEMORY_SUMMARY_CMD, limit).await?;
    let percent = parse_used_percent(&text)
        .ok_or_else(|| WatchdogError::probe("No memory line in summary"))?;
    Ok(Reading::Number(percent))
}

/// `round(used / total * 100)` from the `Mem:` line of `free -m`.
fn parse_used_percent(text: &str) -> Option<f64> {
    let line = text
        .lines()
        .find(|l| l.to_lowercase().starts_with("mem"))?;
    let mut fields = line.split_whitespace();
    let total: f64 = fields.nth(1)?.parse().ok()?;
    let used: f64 = fields.next()?.parse().ok()?;
    if total <= 0.0 {
        return None;
    }
    Some((used / total * 100.0).round())
}
