//! Metric probes.
//!
//! One probe per resource kind, each a thin shell over an OS introspection
//! tool. Probe failures are independent: one probe erroring must not prevent
//! the others from running in the same cycle.

mod cpu;
mod disk;
mod network;
mod ram;
mod shell;

pub use shell::run_command;

use std::fmt;
use std::time::Duration;

use crate::error::{Result, WatchdogError};

/// Bound on a single probe invocation. A stuck OS tool is reported as a
/// probe error instead of stalling the sampling loop.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// A single normalized measurement for one resource.
///
/// Percent-style resources read as plain numbers; size-style resources read
/// as human-readable size strings compared through the unit parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Number(f64),
    Size(String),
}

impl Reading {
    /// JSON form used in the per-cycle readings object.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Reading::Number(n) => serde_json::Value::from(*n),
            Reading::Size(s) => serde_json::Value::from(s.as_str()),
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{}", n),
            Reading::Size(s) => f.write_str(s),
        }
    }
}

/// Capability seam between the monitor loop and the OS.
///
/// The loop only ever asks for "the current reading for this resource", so
/// tests can substitute a canned implementation and the probes can later be
/// swapped for native APIs without touching the loop.
#[allow(async_fn_in_trait)]
pub trait Sampler {
    async fn sample(&self, resource: &str) -> Result<Reading>;
}

/// Samples the host by scraping standard OS tools (`top`, `df`, `free`,
/// `/proc/net/dev`).
#[derive(Debug, Clone)]
pub struct SystemSampler {
    timeout: Duration,
}

impl SystemSampler {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

impl Sampler for SystemSampler {
    async fn sample(&self, resource: &str) -> Result<Reading> {
        match resource {
            "cpu" => cpu::sample(self.timeout).await,
            "disk" => disk::sample(self.timeout).await,
            "ram" => ram::sample(self.timeout).await,
            "network" => network::sample().await,
            other => Err(WatchdogError::probe(format!(
                "No probe for resource \"{}\"",
                other
            ))),
        }
    }
}
