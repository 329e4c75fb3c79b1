//! Watchdog command handler.
//!
//! Loads the configuration, wires the monitor together, and blocks on the
//! sampling loop forever.

use anyhow::{Context, Result};
use clap::ArgMatches;
use std::path::Path;

use crate::core::config::Settings;
use crate::core::dispatch::AlertDispatcher;
use crate::core::logsink::ActivityLog;
use crate::core::monitor::Monitor;
use crate::core::probe::SystemSampler;

/// Execute the watchdog loop
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.json");

    let settings = Settings::load(Path::new(config_path))?;

    let activity = ActivityLog::new(settings.log.dir.clone(), settings.log.enabled)
        .context("Failed to initialize activity log")?;

    let dispatcher = AlertDispatcher::new(settings.http_request.clone())
        .context("Failed to initialize alert dispatcher")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name("watchdog-worker")
        .build()
        .context("Failed to build async runtime")?;

    let monitor = Monitor::new(settings, SystemSampler::default(), dispatcher, activity);

    runtime.block_on(monitor.run());

    Ok(())
}
