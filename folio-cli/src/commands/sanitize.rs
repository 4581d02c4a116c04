use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use folio_guard::{ContentSanitizer, escape};

use super::read_input;
use crate::config;

#[derive(Args)]
pub struct SanitizeArgs {
    /// HTML file (default: stdin)
    pub file: Option<PathBuf>,

    /// Strip images
    #[arg(long)]
    pub no_images: bool,

    /// Strip links
    #[arg(long)]
    pub no_links: bool,

    /// Allow an extra tag (repeatable)
    #[arg(long = "allow-tag", value_name = "TAG")]
    pub allow_tags: Vec<String>,

    /// Treat input as pasted content (plain text passes through)
    #[arg(long)]
    pub paste: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// HTML file (default: stdin)
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct EscapeArgs {
    /// Text to escape (default: stdin)
    pub text: Option<String>,
}

pub fn run_sanitize(args: SanitizeArgs, explicit: Option<&Path>) -> Result<ExitCode> {
    let config = config::load(explicit)?;
    let sanitizer = ContentSanitizer::new(&config.sanitizer);

    let mut options = sanitizer.options().clone();
    if args.no_images {
        options = options.without_images();
    }
    if args.no_links {
        options = options.without_links();
    }
    for tag in args.allow_tags {
        options = options.with_tag(tag.to_lowercase());
    }

    let input = read_input(args.file.as_deref())?;
    let output = if args.paste {
        sanitizer.sanitize_paste(&input, &options)
    } else {
        sanitizer.sanitize(input.as_str(), &options)
    };
    println!("{}", output);
    Ok(ExitCode::SUCCESS)
}

pub fn run_check(args: CheckArgs) -> Result<ExitCode> {
    let input = read_input(args.file.as_deref())?;
    if ContentSanitizer::contains_dangerous_content(&input) {
        println!("dangerous");
        Ok(ExitCode::from(1))
    } else {
        println!("clean");
        Ok(ExitCode::SUCCESS)
    }
}

pub fn run_escape(args: EscapeArgs) -> Result<ExitCode> {
    let text = match args.text {
        Some(text) => text,
        None => read_input(None)?,
    };
    print!("{}", escape(&text));
    Ok(ExitCode::SUCCESS)
}
