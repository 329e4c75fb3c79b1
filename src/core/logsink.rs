//! Activity log.
//!
//! Process-wide append-only record of what the watchdog did: every line goes
//! to the console, and optionally to one JSONL file per UTC day. Old daily
//! files are pruned once at startup; growth within a run is bounded only by
//! the daily rotation.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::Result;

static FILE_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").expect("valid file date regex"));

/// One record as persisted to the daily JSONL files.
#[derive(Debug, Serialize)]
struct LogRecord<'a> {
    timestamp: &'a str,
    message: &'a str,
}

/// Append-only activity log with day-partitioned persistence.
#[derive(Debug)]
pub struct ActivityLog {
    dir: PathBuf,
    to_file: bool,
}

impl ActivityLog {
    /// Create the log, ensuring the directory exists.
    pub fn new(dir: impl Into<PathBuf>, to_file: bool) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, to_file })
    }

    /// Record one activity line.
    ///
    /// Console output is unconditional. The file append is best-effort: a
    /// write failure is reported through the diagnostics log and never
    /// interrupts the cycle that produced the message.
    pub fn log(&self, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        println!("[{}] {}", timestamp, message);

        if self.to_file {
            if let Err(e) = self.append(&timestamp, message) {
                log::warn!("Failed to append to activity log: {}", e);
            }
        }
    }

    fn append(&self, timestamp: &str, message: &str) -> Result<()> {
        let path = self
            .dir
            .join(format!("{}.jsonl", Utc::now().format("%Y-%m-%d")));
        let record = serde_json::to_string(&LogRecord { timestamp, message })?;

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", record)?;

        Ok(())
    }

    /// Delete daily files older than the retention window.
    ///
    /// Runs once at startup. Whole-file granularity: a file is removed when
    /// the date embedded in its name is more than `persist_days` days old;
    /// files without a parseable date are left untouched.
    pub fn prune_old(&self, persist_days: i64) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Failed to scan log directory {:?}: {}", self.dir, e);
                return;
            }
        };

        let today = Utc::now().date_naive();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();

            let date = match FILE_DATE_RE
                .captures(&name)
                .and_then(|caps| NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok())
            {
                Some(date) => date,
                None => continue,
            };

            if (today - date).num_days() > persist_days {
                match fs::remove_file(entry.path()) {
                    Ok(()) => println!("Deleted old log: {}", name),
                    Err(e) => log::warn!("Failed to delete old log {}: {}", name, e),
                }
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
