//! Config subcommand implementation.
//!
//! Handles `digipal config [--init]`.

use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::Parser;
use std::path::Path;

/// Show or initialize the settings file.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Write default settings to the settings file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing settings file when used with --init
    #[arg(long, requires = "init")]
    pub force: bool,
}

impl ConfigCommand {
    /// Execute the config command.
    pub fn execute(&self, explicit: Option<&Path>, quiet: bool) -> CliResult<()> {
        let path = AppSettings::resolve_path(explicit)?;

        if self.init {
            if path.exists() && !self.force {
                return Err(CliError::Other(format!(
                    "settings file {} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            AppSettings::default().save_to(&path)?;
            if !quiet {
                output::print_success(&format!("Wrote default settings to {}", path.display()));
            }
            return Ok(());
        }

        let settings = AppSettings::load(explicit)?;
        if !quiet {
            let origin = if path.exists() { "" } else { " (not present, showing defaults)" };
            output::print_info(&format!("Settings file: {}{}", path.display(), origin));
        }
        output::write_json(&mut std::io::stdout().lock(), &settings)?;
        Ok(())
    }
}
