//! digipal command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use digipal::cli::{Cli, Commands};
use digipal::config::AppSettings;
use digipal::output;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.as_deref();

    match &cli.command {
        Commands::Config(cmd) => cmd.execute(explicit, cli.quiet)?,
        Commands::Check(cmd) => {
            let settings = load_settings(explicit)?;
            cmd.execute(&settings)?;
        }
        Commands::Longest(cmd) => {
            let settings = load_settings(explicit)?;
            cmd.execute(&settings)?;
        }
    }

    Ok(())
}

fn load_settings(explicit: Option<&std::path::Path>) -> Result<AppSettings> {
    let settings = AppSettings::load(explicit).context("failed to load settings")?;
    debug!(format = %settings.default_output_format, "settings resolved");
    Ok(settings)
}
