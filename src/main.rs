use anyhow::Result;
use clap::{Arg, Command};

use hostwatch::commands;

fn build_cli() -> Command {
    Command::new("hostwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resource watchdog: samples host usage and fires HTTP alerts on constraint violations")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the configuration file")
                .default_value("config.json")
                .global(true),
        )
        .subcommand(
            Command::new("check")
                .about("Validate the configuration and print what the watchdog would do"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(clap_complete::Shell))
                        .index(1),
                ),
        )
}

fn main() -> Result<()> {
    hostwatch::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    match matches.subcommand() {
        Some(("check", sub_matches)) => commands::check::execute(sub_matches),
        Some(("completions", sub_matches)) => commands::completions::execute(sub_matches, &mut cli),
        // No subcommand: run the watchdog until the process is killed
        _ => commands::run::execute(&matches),
    }
}
