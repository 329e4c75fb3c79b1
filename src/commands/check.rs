//! Configuration check command handler.
//!
//! Loads and validates the configuration without starting the loop, then
//! prints what the watchdog would do with it.

use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::Path;

use crate::core::config::{Constraint, Settings};
use crate::core::units::parse_size;

/// Execute the check command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config_path = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.json");

    let settings = Settings::load(Path::new(config_path))?;

    println!("{} {}", "Configuration:".bold(), config_path);
    println!("  Interval: {}s", settings.interval);
    println!(
        "  Alert endpoint: {} {}",
        settings.http_request.method, settings.http_request.url
    );
    println!(
        "  Log: enabled={}, retention={} days, dir={}",
        settings.log.enabled,
        settings.log.persist,
        settings.log.dir.display()
    );

    println!("  Resources:");
    let mut warnings = 0;
    for resource in &settings.resources {
        match settings.constraints.for_resource(resource) {
            Some(Constraint::Number(limit)) => {
                println!("    {} {} (limit {})", "ok".green(), resource, limit);
            }
            Some(Constraint::Size(limit)) => {
                if parse_size(&limit).is_some() {
                    println!("    {} {} (limit {})", "ok".green(), resource, limit);
                } else {
                    warnings += 1;
                    println!(
                        "    {} {} (limit \"{}\" is not a parseable size)",
                        "warn".yellow(),
                        resource,
                        limit
                    );
                }
            }
            None => {
                warnings += 1;
                println!(
                    "    {} {} has no matching constraint",
                    "warn".yellow(),
                    resource
                );
            }
        }
    }

    if warnings == 0 {
        println!("\n{}", "Configuration OK".green().bold());
    } else {
        println!(
            "\n{}",
            format!("Configuration loaded with {} warning(s)", warnings).yellow()
        );
    }

    Ok(())
}
