//! CPU busy-percentage probe.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use super::shell::run_command;
use super::Reading;
use crate::error::{Result, WatchdogError};

const LOAD_SUMMARY_CMD: &str = "top -bn1 | grep 'Cpu(s)'";

static IDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*id").expect("valid idle regex"));

pub async fn sample(limit: Duration) -> Result<Reading> {
    let text = run_command(LOAD_SUMMARY_CMD, limit).await?;
    let busy = parse_busy_percent(&text)
        .ok_or_else(|| WatchdogError::probe("No idle percentage in load summary"))?;
    Ok(Reading::Number(busy))
}

/// Busy percentage is 100 minus the idle share reported by `top`, rounded
/// to two decimals.
fn parse_busy_percent(text: &str) -> Option<f64> {
    let caps = IDLE_RE.captures(text)?;
    let idle: f64 = caps[1].parse().ok()?;
    Some(((100.0 - idle) * 100.0).round() / 100.0)
}
