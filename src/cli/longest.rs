//! Longest subcommand implementation.
//!
//! Handles `digipal longest <integer>`: finds the longest palindromic run of
//! digits and prints its length and value.

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output::{self, LongestReport};
use crate::types::DigitSequence;
use clap::Parser;
use tracing::info;

/// Find the longest palindromic run of digits in an integer.
#[derive(Parser, Debug)]
pub struct LongestCommand {
    /// Non-negative integer to analyze (any number of digits)
    #[arg(value_name = "INTEGER", allow_negative_numbers = true)]
    pub value: String,

    /// Output format for results (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

impl LongestCommand {
    /// Execute the longest command.
    pub fn execute(&self, settings: &AppSettings) -> CliResult<()> {
        let seq: DigitSequence = self.value.parse()?;
        let report = LongestReport::new(&seq);
        info!(
            digits = seq.len(),
            best_length = report.best_length,
            "longest palindrome search complete"
        );

        let format = self.output.unwrap_or(settings.default_output_format);
        output::print_longest(&report, format, settings)?;
        Ok(())
    }
}
