//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::report::{CheckReport, LongestReport};
use crate::config::AppSettings;
use console::style;
use std::io::{self, Write};

/// Write a check report as labelled lines.
pub fn write_check<W: Write>(out: &mut W, report: &CheckReport, settings: &AppSettings) -> io::Result<()> {
    writeln!(out, "  {:<12} {}", style("Input:").bold(), report.input)?;
    if settings.show_digits {
        writeln!(out, "  {:<12} {}", style("Digits:").bold(), report.digits.to_list_string())?;
    }
    let verdict = if report.is_palindrome {
        style("true").green().bold()
    } else {
        style("false").red().bold()
    };
    writeln!(out, "  {:<12} {}", style("Palindrome:").bold(), verdict)?;
    Ok(())
}

/// Write a longest-palindrome report as labelled lines.
pub fn write_longest<W: Write>(
    out: &mut W,
    report: &LongestReport,
    settings: &AppSettings,
) -> io::Result<()> {
    writeln!(out, "  {:<12} {}", style("Input:").bold(), report.input)?;
    if settings.show_digits {
        writeln!(out, "  {:<12} {}", style("Digits:").bold(), report.digits.to_list_string())?;
    }
    writeln!(out, "  {:<12} {}", style("Length:").bold(), report.best_length)?;

    let value = match report.best_value {
        Some(ref v) => style(v.as_str()).green().bold(),
        None => style(report.value_display()).dim(),
    };
    writeln!(out, "  {:<12} {}", style("Value:").bold(), value)?;

    if settings.show_span {
        if let (Some(start), Some(end), Some(center)) = (report.start, report.end, report.center) {
            writeln!(
                out,
                "  {:<12} {}..={} {}",
                style("Span:").bold(),
                start,
                end,
                style(format!("(center: {})", center)).dim()
            )?;
        }
    }
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}
