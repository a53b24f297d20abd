//! file-lookup - find files and directories by name or suffix
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use file_lookup::config::{CliArgs, LookupConfig, Request};
use file_lookup::progress::{print_header, print_summary, ProgressReporter};
use file_lookup::walker::WalkProgress;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    setup_logging(args.verbose)?;

    let config = LookupConfig::from_args(args).context("Invalid configuration")?;

    if config.show_progress {
        print_header(&config.root.display().to_string(), &config.request.describe());
    }

    let progress = (config.show_progress && !matches!(config.request, Request::Kind(_)))
        .then(ProgressReporter::new);
    if let Some(ref p) = progress {
        p.set_status("Walking...");
    }

    let outcome = config.execute(|walk: &WalkProgress| {
        if let Some(ref p) = progress {
            p.update(walk);
        }
    });

    if let Some(ref p) = progress {
        p.finish_and_clear();
    }

    let execution = outcome.context("Lookup failed")?;
    print!("{}", execution.output);

    if progress.is_some() {
        print_summary(&execution.stats, execution.found);
    }

    if execution.stats.errors > 0 {
        info!(errors = execution.stats.errors, "Lookup completed with skipped directories");
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("file_lookup=debug,warn")
    } else {
        EnvFilter::new("file_lookup=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
