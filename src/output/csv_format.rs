//! CSV output formatting.

use super::report::{CheckReport, LongestReport};
use std::io::{self, Write};

/// Write a check report as a header and one row.
pub fn write_check<W: Write>(out: W, report: &CheckReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["input", "length", "is_palindrome"])?;
    let length = report.length.to_string();
    let verdict = report.is_palindrome.to_string();
    wtr.write_record([report.input.as_str(), length.as_str(), verdict.as_str()])?;
    wtr.flush()?;
    Ok(())
}

/// Write a longest-palindrome report as a header and one row.
///
/// Missing fields are left empty.
pub fn write_longest<W: Write>(out: W, report: &LongestReport) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["input", "best_length", "best_value", "start", "end"])?;
    let best_length = report.best_length.to_string();
    let start = report.start.map_or(String::new(), |s| s.to_string());
    let end = report.end.map_or(String::new(), |e| e.to_string());
    wtr.write_record([
        report.input.as_str(),
        best_length.as_str(),
        report.best_value.as_deref().unwrap_or(""),
        start.as_str(),
        end.as_str(),
    ])?;
    wtr.flush()?;
    Ok(())
}
