//! mindlog - mood journal with keyword insights
//!
//! Usage:
//!   mindlog --score 4 Had a great walk      Add an entry
//!   mindlog --label "2 stars" Long meeting  Add an entry scored by a classifier label
//!   mindlog --trend --insights              Show the mood trend and insights
//!   mindlog --companion                     Show the companion's opening prompt

mod cli;
mod cli_modes;
mod common;
mod render;

use anyhow::Result;
use cli_modes::{CliModeResult, editor_mode, read_mode, write_mode};
use mindlog_core::{Config, MoodJournal};
use render::{RenderOptions, Renderer, use_color};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::new();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mindlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Priority: RUST_LOG env var > --verbose flag > default (warn).
/// Logs go to stderr so `--json` output stays clean.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(path) = &cli.log {
        config = config.with_log_path(path.clone());
    }
    let journal = MoodJournal::with_config(config)?;
    tracing::debug!(log = %journal.log().path().display(), "journal opened");

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: use_color(cli.color) && !cli.json,
        policy: journal.config.policy,
    }));

    if cli.path {
        println!("{}", journal.log().path().display());
        return Ok(());
    }

    let wrote = matches!(write_mode(cli, &renderer, &journal)?, CliModeResult::Finish)
        || matches!(editor_mode(cli, &renderer, &journal)?, CliModeResult::Finish);

    if let CliModeResult::Finish = read_mode(cli, &renderer, &journal, wrote)? {
        return Ok(());
    }

    if !wrote {
        renderer.print_info(
            "Nothing to do. Add an entry with `mindlog --score 4 Had a great walk`, or see `mindlog --help`.",
        );
    }
    Ok(())
}
