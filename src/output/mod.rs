//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of reports.

mod csv_format;
mod json_format;
mod plain;
mod report;

pub use json_format::write_json;
pub use plain::{print_error, print_info, print_success};
pub use report::{CheckReport, LongestReport};

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use std::io::{self, Write};

/// Format and print a check report according to the specified format.
pub fn print_check(report: &CheckReport, format: OutputFormat, settings: &AppSettings) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => plain::write_check(&mut out, report, settings)?,
        OutputFormat::Json => write_json(&mut out, report)?,
        OutputFormat::Csv => csv_format::write_check(&mut out, report)?,
    }
    out.flush()
}

/// Format and print a longest-palindrome report according to the specified format.
pub fn print_longest(
    report: &LongestReport,
    format: OutputFormat,
    settings: &AppSettings,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Plain => plain::write_longest(&mut out, report, settings)?,
        OutputFormat::Json => write_json(&mut out, report)?,
        OutputFormat::Csv => csv_format::write_longest(&mut out, report)?,
    }
    out.flush()
}
