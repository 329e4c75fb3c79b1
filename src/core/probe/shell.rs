//! Bounded shell command execution for the probes.

use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{Result, WatchdogError};

/// Run a shell command and capture its stdout, bounded by `limit`.
///
/// The child is killed if the bound elapses; a hung tool becomes a probe
/// error for its resource instead of stalling the whole loop.
pub async fn run_command(cmd: &str, limit: Duration) -> Result<String> {
    let output = timeout(
        limit,
        Command::new("sh")
            .arg("-c")
            .arg(cmd)
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| {
        WatchdogError::probe(format!(
            "Command timed out after {}s: {}",
            limit.as_secs(),
            cmd
        ))
    })?
    .map_err(|e| WatchdogError::probe(format!("Failed to run \"{}\": {}", cmd, e)))?;

    if !output.status.success() {
        return Err(WatchdogError::probe(format!(
            "Command \"{}\" exited with {}",
            cmd, output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
