//! Check subcommand implementation.
//!
//! Handles `digipal check <integer>`: reports the digit sequence and whether
//! it reads the same in both directions.

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::{self, CheckReport};
use crate::types::DigitSequence;
use clap::Parser;
use tracing::info;

/// Check whether the digits of an integer form a palindrome.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Non-negative integer to analyze (any number of digits)
    #[arg(value_name = "INTEGER", allow_negative_numbers = true)]
    pub value: String,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let seq: DigitSequence = self.value.parse()?;
        let report = CheckReport::new(&seq);
        info!(
            digits = report.length,
            is_palindrome = report.is_palindrome,
            "palindrome check complete"
        );

        let format = self.output.unwrap_or(settings.default_output_format);
        output::print_check(&report, format, settings)?;
        Ok(())
    }
}
