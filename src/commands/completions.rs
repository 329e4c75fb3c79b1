use anyhow::Result;
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    match matches.get_one::<Shell>("shell").copied() {
        Some(shell) => {
            generate(shell, cli, "hostwatch", &mut io::stdout());
            Ok(())
        }
        None => anyhow::bail!(
            "shell argument is required (supported: bash, zsh, fish, powershell, elvish)"
        ),
    }
}
