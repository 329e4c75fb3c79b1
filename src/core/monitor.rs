//! Monitor loop.
//!
//! Orchestrates one sampling cycle per configured interval: sample every
//! resource named in configuration, evaluate constraints, dispatch an alert
//! if anything violated, log, repeat. Every steady-state error is contained
//! within the cycle that produced it.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};

use crate::core::config::Settings;
use crate::core::dispatch::AlertDispatcher;
use crate::core::evaluator::{evaluate, Verdict};
use crate::core::logsink::ActivityLog;
use crate::core::probe::{Reading, Sampler};

/// Result of one sampling cycle. Readings and alerts both preserve
/// resource-declaration order.
#[derive(Debug)]
pub struct CycleOutcome {
    pub readings: Vec<(String, Reading)>,
    pub alerts: Vec<String>,
}

/// Drives the sample -> evaluate -> dispatch -> log cycle.
pub struct Monitor<S: Sampler> {
    settings: Settings,
    sampler: S,
    dispatcher: AlertDispatcher,
    activity: ActivityLog,
}

impl<S: Sampler> Monitor<S> {
    pub fn new(
        settings: Settings,
        sampler: S,
        dispatcher: AlertDispatcher,
        activity: ActivityLog,
    ) -> Self {
        Self {
            settings,
            sampler,
            dispatcher,
            activity,
        }
    }

    /// Run until the process is killed.
    ///
    /// Prunes the activity log once, then drives one [`tick`](Self::tick)
    /// per interval on a fixed-period ticker. There is no internal shutdown
    /// path.
    pub async fn run(&self) {
        self.activity.log("Hostwatch started...");
        self.activity.prune_old(self.settings.log.persist);

        let mut ticker = interval(Duration::from_secs(self.settings.interval));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            self.tick().await;
        }
    }

    /// One full sampling cycle.
    ///
    /// A resource without a constraint contributes a configuration-error log
    /// line and nothing else. A failing probe is logged and excluded from
    /// both readings and alerts. A failing dispatch is logged and the cycle
    /// ends normally.
    pub async fn tick(&self) -> CycleOutcome {
        let mut readings: Vec<(String, Reading)> = Vec::new();
        let mut alerts: Vec<String> = Vec::new();

        for resource in &self.settings.resources {
            let constraint = match self.settings.constraints.for_resource(resource) {
                Some(constraint) => constraint,
                None => {
                    self.activity.log(&format!(
                        "Configuration error: resource \"{}\" has no matching constraint",
                        resource
                    ));
                    continue;
                }
            };

            let reading = match self.sampler.sample(resource).await {
                Ok(reading) => reading,
                Err(e) => {
                    self.activity
                        .log(&format!("Probe error for \"{}\": {}", resource, e));
                    continue;
                }
            };

            match evaluate(&reading, &constraint) {
                Verdict::Violated => alerts.push(resource.clone()),
                Verdict::Within => {}
                Verdict::Incomparable => {
                    self.activity.log(&format!(
                        "Warning: reading for \"{}\" is not comparable to its constraint",
                        resource
                    ));
                }
            }

            readings.push((resource.clone(), reading));
        }

        self.activity
            .log(&format!("Readings: {}", readings_json(&readings)));

        if !alerts.is_empty() {
            match self.dispatcher.dispatch(&readings).await {
                Ok(status) => self.activity.log(&format!(
                    "Alert sent for: {} | Status: {}",
                    alerts.join(", "),
                    status.as_u16()
                )),
                Err(e) => self.activity.log(&format!("Failed to send alert: {}", e)),
            }
        }

        CycleOutcome { readings, alerts }
    }
}

/// Render the cycle readings as a JSON object in declaration order.
fn readings_json(readings: &[(String, Reading)]) -> String {
    let mut map = serde_json::Map::new();
    for (name, reading) in readings {
        map.insert(name.clone(), reading.to_value());
    }
    serde_json::Value::Object(map).to_string()
}
