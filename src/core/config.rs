use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A configured limit for a single resource.
///
/// Percent-style resources (cpu, ram) carry plain numbers; size-style
/// resources (disk, network) carry human-readable size strings that are
/// normalized before comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    Number(f64),
    Size(String),
}

/// Watchdog settings, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Resources to sample each cycle, in the order they should be reported
    pub resources: Vec<String>,
    #[serde(default)]
    pub constraints: Constraints,
    /// Sampling interval in seconds
    pub interval: u64,
    pub http_request: HttpRequest,
    pub log: LogSettings,
}

/// Per-resource limits. All fields are optional; a resource listed in
/// `resources` without a matching limit is reported as a configuration
/// error each cycle instead of being sampled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Constraints {
    #[serde(default)]
    pub cpu: Option<f64>,
    #[serde(default)]
    pub disk: Option<String>,
    #[serde(default)]
    pub ram: Option<f64>,
    #[serde(default)]
    pub network: Option<String>,
}

/// Outbound alert request descriptor.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpRequest {
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Body template; `{resource}` placeholders are substituted with the
    /// current readings at dispatch time
    pub body: serde_json::Value,
}

/// Activity log settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Whether to persist activity to daily JSONL files (console output is
    /// unconditional)
    pub enabled: bool,
    /// Retention window in days for daily log files
    pub persist: i64,
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let settings: Settings = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        settings.validate()?;

        Ok(settings)
    }

    /// Reject configurations the loop could not run against. Called once at
    /// load time so malformed settings surface before the first cycle.
    fn validate(&self) -> Result<()> {
        if self.resources.is_empty() {
            bail!("No resources configured");
        }

        if self.interval == 0 {
            bail!("Sampling interval must be at least 1 second");
        }

        if self.log.persist < 0 {
            bail!("Log retention must not be negative");
        }

        reqwest::Url::parse(&self.http_request.url)
            .with_context(|| format!("Invalid alert URL: {}", self.http_request.url))?;

        reqwest::Method::from_bytes(self.http_request.method.as_bytes())
            .with_context(|| format!("Invalid HTTP method: {}", self.http_request.method))?;

        Ok(())
    }

    /// Resources listed for sampling that have no matching constraint
    pub fn unconstrained_resources(&self) -> Vec<&str> {
        self.resources
            .iter()
            .filter(|r| self.constraints.for_resource(r).is_none())
            .map(String::as_str)
            .collect()
    }
}

impl Constraints {
    /// Look up the configured limit for a resource name.
    pub fn for_resource(&self, name: &str) -> Option<Constraint> {
        match name {
            "cpu" => self.cpu.map(Constraint::Number),
            "ram" => self.ram.map(Constraint::Number),
            "disk" => self.disk.clone().map(Constraint::Size),
            "network" => self.network.clone().map(Constraint::Size),
            _ => None,
        }
    }
}
