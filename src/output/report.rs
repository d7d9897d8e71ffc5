//! Serializable reports produced by the subcommands.
//!
//! Reports are fully built before anything is printed, so a failing query
//! never leaves partial output behind.

use crate::engine::{self, ScanResult};
use crate::types::{Center, DigitSequence};
use serde::Serialize;

/// Result of `digipal check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Canonical decimal form of the input.
    pub input: String,
    pub digits: DigitSequence,
    pub length: usize,
    pub is_palindrome: bool,
}

impl CheckReport {
    pub fn new(seq: &DigitSequence) -> Self {
        Self {
            input: seq.to_string(),
            digits: seq.clone(),
            length: seq.len(),
            is_palindrome: engine::is_palindrome(seq),
        }
    }
}

/// Result of `digipal longest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestReport {
    /// Canonical decimal form of the input.
    pub input: String,
    pub digits: DigitSequence,
    pub best_length: usize,
    /// Decimal string so values beyond any fixed width survive serialization.
    pub best_value: Option<String>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub center: Option<Center>,
}

impl LongestReport {
    pub fn new(seq: &DigitSequence) -> Self {
        Self::from_scan(seq, &engine::find_longest_palindrome(seq))
    }

    pub fn from_scan(seq: &DigitSequence, scan: &ScanResult) -> Self {
        let span = scan.span();
        Self {
            input: seq.to_string(),
            digits: seq.clone(),
            best_length: scan.best_length(),
            best_value: scan.best_value().map(|v| v.to_string()),
            start: span.map(|s| s.start()),
            end: span.map(|s| s.end()),
            center: span.map(|s| s.center()),
        }
    }

    /// Best value for display, `none` when nothing was found.
    pub fn value_display(&self) -> &str {
        self.best_value.as_deref().unwrap_or("none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_report() {
        let report = CheckReport::new(&DigitSequence::from_u64(101010101));
        assert!(report.is_palindrome);
        assert_eq!(report.length, 9);
        assert_eq!(report.input, "101010101");
    }

    #[test]
    fn test_longest_report() {
        let report = LongestReport::new(&DigitSequence::from_u64(1221));
        assert_eq!(report.best_length, 4);
        assert_eq!(report.value_display(), "1221");
        assert_eq!((report.start, report.end), (Some(0), Some(3)));
        assert_eq!(report.center, Some(Center::Gap { index: 1 }));
    }

    #[test]
    fn test_longest_report_empty() {
        let report = LongestReport::new(&DigitSequence::empty());
        assert_eq!(report.best_length, 0);
        assert_eq!(report.value_display(), "none");
        assert!(report.start.is_none());
    }

    #[test]
    fn test_longest_report_json_shape() {
        let report = LongestReport::new(&DigitSequence::from_u64(12321));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_value"], "12321");
        assert_eq!(json["digits"], serde_json::json!([1, 2, 3, 2, 1]));
        assert_eq!(json["center"]["kind"], "digit");
        assert_eq!(json["center"]["index"], 2);
    }
}
