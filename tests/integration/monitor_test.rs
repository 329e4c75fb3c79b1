use std::collections::HashMap;

use hostwatch::core::config::{Constraints, HttpRequest, LogSettings, Settings};
use hostwatch::core::dispatch::AlertDispatcher;
use hostwatch::core::logsink::ActivityLog;
use hostwatch::core::monitor::Monitor;
use hostwatch::core::probe::{Reading, Sampler};
use hostwatch::error::{Result, WatchdogError};
use tempfile::TempDir;

/// Canned sampler: returns the configured reading, or a probe error for
/// resources it has no reading for.
struct MockSampler {
    readings: HashMap<String, Reading>,
}

impl MockSampler {
    fn new(pairs: &[(&str, Reading)]) -> Self {
        Self {
            readings: pairs
                .iter()
                .map(|(name, reading)| (name.to_string(), reading.clone()))
                .collect(),
        }
    }
}

impl Sampler for MockSampler {
    async fn sample(&self, resource: &str) -> Result<Reading> {
        self.readings
            .get(resource)
            .cloned()
            .ok_or_else(|| WatchdogError::probe(format!("no reading for {}", resource)))
    }
}

fn settings(resources: &[&str], constraints: Constraints) -> Settings {
    Settings {
        resources: resources.iter().map(|s| s.to_string()).collect(),
        constraints,
        interval: 1,
        http_request: HttpRequest {
            // Nothing listens here; dispatch attempts fail fast
            url: "http://127.0.0.1:1/alert".to_string(),
            method: "POST".to_string(),
            headers: HashMap::new(),
            body: serde_json::json!({ "text": "cpu {cpu} disk {disk}" }),
        },
        log: LogSettings {
            enabled: true,
            persist: 7,
            dir: "unused".into(),
        },
    }
}

fn monitor_with(
    dir: &TempDir,
    settings: Settings,
    sampler: MockSampler,
) -> Monitor<MockSampler> {
    let activity = ActivityLog::new(dir.path().join("logs"), true).unwrap();
    let dispatcher = AlertDispatcher::new(settings.http_request.clone()).unwrap();
    Monitor::new(settings, sampler, dispatcher, activity)
}

fn log_contents(dir: &TempDir) -> String {
    let mut all = String::new();
    for entry in std::fs::read_dir(dir.path().join("logs")).unwrap().flatten() {
        all.push_str(&std::fs::read_to_string(entry.path()).unwrap());
    }
    all
}

#[tokio::test]
async fn test_tick_preserves_declaration_order() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ram: Some(90.0),
        disk: Some("1.5G".to_string()),
        network: None,
    };
    let sampler = MockSampler::new(&[
        ("cpu", Reading::Number(85.0)),
        ("ram", Reading::Number(90.0)),
        ("disk", Reading::Size("2.0G".to_string())),
    ]);
    let monitor = monitor_with(&dir, settings(&["disk", "cpu", "ram"], constraints), sampler);

    let outcome = monitor.tick().await;

    let names: Vec<&str> = outcome.readings.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["disk", "cpu", "ram"]);
    // disk 2.0G > 1.5G and cpu 85 > 80 violate; ram 90 == 90 does not
    assert_eq!(outcome.alerts, vec!["disk", "cpu"]);
}

#[tokio::test]
async fn test_missing_constraint_logs_config_error_and_takes_no_reading() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ..Default::default()
    };
    let sampler = MockSampler::new(&[("cpu", Reading::Number(10.0))]);
    let monitor = monitor_with(&dir, settings(&["cpu", "gpu"], constraints), sampler);

    let outcome = monitor.tick().await;

    assert_eq!(outcome.readings.len(), 1);
    assert_eq!(outcome.readings[0].0, "cpu");
    assert!(outcome.alerts.is_empty());

    let log = log_contents(&dir);
    let config_errors = log
        .lines()
        .filter(|l| l.contains("resource \\\"gpu\\\" has no matching constraint"))
        .count();
    assert_eq!(config_errors, 1);
}

#[tokio::test]
async fn test_probe_error_excludes_resource_but_not_the_cycle() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ram: Some(50.0),
        ..Default::default()
    };
    // No cpu reading: that probe fails, ram still evaluates
    let sampler = MockSampler::new(&[("ram", Reading::Number(75.0))]);
    let monitor = monitor_with(&dir, settings(&["cpu", "ram"], constraints), sampler);

    let outcome = monitor.tick().await;

    let names: Vec<&str> = outcome.readings.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["ram"]);
    assert_eq!(outcome.alerts, vec!["ram"]);
    assert!(log_contents(&dir).contains("Probe error for \\\"cpu\\\""));
}

#[tokio::test]
async fn test_failed_dispatch_is_contained_and_logged() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ..Default::default()
    };
    let sampler = MockSampler::new(&[("cpu", Reading::Number(95.0))]);
    let monitor = monitor_with(&dir, settings(&["cpu"], constraints), sampler);

    // The alert endpoint is unreachable; tick must still complete
    let outcome = monitor.tick().await;

    assert_eq!(outcome.alerts, vec!["cpu"]);
    assert!(log_contents(&dir).contains("Failed to send alert"));
}

#[tokio::test]
async fn test_no_violation_means_no_dispatch_attempt() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ..Default::default()
    };
    let sampler = MockSampler::new(&[("cpu", Reading::Number(80.0))]);
    let monitor = monitor_with(&dir, settings(&["cpu"], constraints), sampler);

    let outcome = monitor.tick().await;

    assert!(outcome.alerts.is_empty());
    let log = log_contents(&dir);
    assert!(!log.contains("Alert sent"));
    assert!(!log.contains("Failed to send alert"));
}

#[tokio::test]
async fn test_unparseable_size_reading_warns_instead_of_alerting() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        disk: Some("1.5G".to_string()),
        ..Default::default()
    };
    let sampler = MockSampler::new(&[("disk", Reading::Size("n/a".to_string()))]);
    let monitor = monitor_with(&dir, settings(&["disk"], constraints), sampler);

    let outcome = monitor.tick().await;

    assert!(outcome.alerts.is_empty());
    assert!(log_contents(&dir).contains("not comparable"));
}

#[tokio::test]
async fn test_readings_line_is_logged_each_cycle() {
    let dir = TempDir::new().unwrap();
    let constraints = Constraints {
        cpu: Some(80.0),
        ..Default::default()
    };
    let sampler = MockSampler::new(&[("cpu", Reading::Number(12.5))]);
    let monitor = monitor_with(&dir, settings(&["cpu"], constraints), sampler);

    monitor.tick().await;

    assert!(log_contents(&dir).contains("Readings: {\\\"cpu\\\":12.5}"));
}
