//! Root-filesystem used-space probe.

use std::time::Duration;

use super::shell::run_command;
use super::Reading;
use crate::error::{Result, WatchdogError};

const DISK_USAGE_CMD: &str = "df -h /";

pub async fn sample(limit: Duration) -> Result<Reading> {
    let text = run_command(DISK_USAGE_CMD, limit).await?;
    let used = parse_used(&text)
        .ok_or_else(|| WatchdogError::probe("Unexpected filesystem-usage output"))?;
    Ok(Reading::Size(used))
}

/// The `Used` column of the root filesystem line, e.g. "2.0G".
fn parse_used(text: &str) -> Option<String> {
    let line = text.trim().lines().nth(1)?;
    let used = line.split_whitespace().nth(2)?;
    Some(used.to_string())
}
