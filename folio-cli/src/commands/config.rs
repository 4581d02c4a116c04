use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the guard configuration in effect
    Show,
    /// Show the configuration file path
    Path,
}

pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> Result<ExitCode> {
    match args.command {
        ConfigCommands::Show => show_config(explicit),
        ConfigCommands::Path => show_path(explicit),
    }
}

fn show_config(explicit: Option<&Path>) -> Result<ExitCode> {
    let config = config::load(explicit)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(ExitCode::SUCCESS)
}

fn show_path(explicit: Option<&Path>) -> Result<ExitCode> {
    let path = config::config_path(explicit);
    let status = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Guard config: {}{}", path.display(), status);
    Ok(ExitCode::SUCCESS)
}
