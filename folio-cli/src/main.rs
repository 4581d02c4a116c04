use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "folio", about = "Sanitize markup and check document permissions")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Guard config file (default: $XDG_CONFIG_HOME/folio/guard.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize HTML from a file or stdin
    Sanitize(commands::sanitize::SanitizeArgs),
    /// Quick advisory check for dangerous markup
    Check(commands::sanitize::CheckArgs),
    /// Escape HTML metacharacters
    Escape(commands::sanitize::EscapeArgs),
    /// Resolve a user's access level on a document
    Access(commands::access::AccessArgs),
    /// Check a block action for a user
    Block(commands::access::BlockArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Sanitize(args) => commands::sanitize::run_sanitize(args, config),
        Commands::Check(args) => commands::sanitize::run_check(args),
        Commands::Escape(args) => commands::sanitize::run_escape(args),
        Commands::Access(args) => commands::access::run_access(args),
        Commands::Block(args) => commands::access::run_block(args),
        Commands::Config(args) => commands::config::run(args, config),
    }
}
