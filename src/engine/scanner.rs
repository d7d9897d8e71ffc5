//! Longest palindromic run via center expansion.
//!
//! Every digit and every gap between adjacent digits is tried as a center, in
//! increasing index order with the digit center first. A candidate replaces
//! the running best only when strictly longer, so among runs of equal maximal
//! length the earliest center wins.

use super::reconstructor::{accumulate, reconstruct_u64};
use crate::error::EngineResult;
use crate::types::{Center, DigitSequence, PalindromeSpan};
use num_bigint::BigUint;
use tracing::{debug, trace};

/// Outcome of [`find_longest_palindrome`].
///
/// Both fields are `None` only for the empty sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    best: Option<PalindromeSpan>,
    value: Option<BigUint>,
}

impl ScanResult {
    /// Length of the longest palindromic run, zero if none was found.
    pub fn best_length(&self) -> usize {
        self.best.map_or(0, |span| span.len())
    }

    /// Integer spelled by the longest run.
    pub fn best_value(&self) -> Option<&BigUint> {
        self.value.as_ref()
    }

    pub fn span(&self) -> Option<PalindromeSpan> {
        self.best
    }

    pub fn is_none(&self) -> bool {
        self.best.is_none()
    }

    /// The best value narrowed to `u64`, or `Ok(None)` when nothing was found.
    pub fn value_u64(&self, seq: &DigitSequence) -> EngineResult<Option<u64>> {
        self.best
            .map(|span| reconstruct_u64(seq, span.start(), span.end()))
            .transpose()
    }
}

/// Grow a palindrome outward from `center` while the mirrored digits match.
///
/// Returns `None` when the center holds no palindrome at all, which only
/// happens for a gap whose two digits differ or a gap past the last digit.
pub fn expand(seq: &DigitSequence, center: Center) -> Option<PalindromeSpan> {
    let digits = seq.as_slice();
    let n = digits.len();
    let (mut left, mut right) = center.bounds();

    if right >= n || digits[left] != digits[right] {
        return None;
    }
    while left > 0 && right + 1 < n && digits[left - 1] == digits[right + 1] {
        left -= 1;
        right += 1;
    }

    PalindromeSpan::new(left, right, center)
}

/// Find the longest contiguous palindromic run in `seq` and reconstruct it.
pub fn find_longest_palindrome(seq: &DigitSequence) -> ScanResult {
    let mut best: Option<PalindromeSpan> = None;

    for i in 0..seq.len() {
        for center in [Center::Digit { index: i }, Center::Gap { index: i }] {
            let Some(span) = expand(seq, center) else {
                continue;
            };
            if span.len() > best.map_or(0, |b| b.len()) {
                trace!(%center, %span, len = span.len(), "new longest palindrome");
                best = Some(span);
            }
        }
    }

    let value = best.map(|span| accumulate(&seq.as_slice()[span.start()..=span.end()]));

    debug!(
        digits = seq.len(),
        best_length = best.map_or(0, |b| b.len()),
        "center expansion scan finished"
    );

    ScanResult { best, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(n: u64) -> (usize, Option<String>) {
        let result = find_longest_palindrome(&DigitSequence::from_u64(n));
        (
            result.best_length(),
            result.best_value().map(|v| v.to_string()),
        )
    }

    #[test]
    fn test_all_distinct_keeps_first_digit() {
        assert_eq!(scan(123456789), (1, Some("1".into())));
    }

    #[test]
    fn test_odd_palindrome() {
        assert_eq!(scan(12321), (5, Some("12321".into())));
    }

    #[test]
    fn test_even_palindrome() {
        assert_eq!(scan(1221), (4, Some("1221".into())));
        assert_eq!(scan(120021), (6, Some("120021".into())));
    }

    #[test]
    fn test_zero() {
        assert_eq!(scan(0), (1, Some("0".into())));
    }

    #[test]
    fn test_inner_run() {
        assert_eq!(scan(9123217), (5, Some("12321".into())));
    }

    #[test]
    fn test_earliest_of_equal_runs_wins() {
        // "121" at 0..=2 and "343" at 3..=5 tie.
        let result = find_longest_palindrome(&DigitSequence::from_u64(121343));
        assert_eq!(result.best_length(), 3);
        assert_eq!(result.best_value().unwrap().to_string(), "121");
        assert_eq!(result.span().unwrap().start(), 0);
    }

    #[test]
    fn test_leading_zero_run() {
        let seq = DigitSequence::from_digits(vec![5, 0, 2, 0, 7]).unwrap();
        let result = find_longest_palindrome(&seq);
        assert_eq!(result.best_length(), 3);
        assert_eq!(result.best_value().unwrap().to_string(), "20");
        assert_eq!(result.value_u64(&seq).unwrap(), Some(20));
    }

    #[test]
    fn test_empty_sequence() {
        let seq = DigitSequence::empty();
        let result = find_longest_palindrome(&seq);
        assert!(result.is_none());
        assert_eq!(result.best_length(), 0);
        assert!(result.best_value().is_none());
        assert_eq!(result.value_u64(&seq).unwrap(), None);
    }

    #[test]
    fn test_expand_gap_mismatch() {
        let seq = DigitSequence::from_u64(12);
        assert!(expand(&seq, Center::Gap { index: 0 }).is_none());
        assert!(expand(&seq, Center::Gap { index: 1 }).is_none());
        let span = expand(&seq, Center::Digit { index: 1 }).unwrap();
        assert_eq!((span.start(), span.end()), (1, 1));
    }

    #[test]
    fn test_long_palindrome_overflows_u64_only() {
        let literal = format!("{}8", "9".repeat(30));
        let seq: DigitSequence = literal.parse().unwrap();
        let result = find_longest_palindrome(&seq);
        assert_eq!(result.best_length(), 30);
        assert_eq!(result.best_value().unwrap().to_string(), "9".repeat(30));
        assert!(result.value_u64(&seq).is_err());
    }

    #[test]
    fn test_repeatable() {
        let seq = DigitSequence::from_u64(8_833_883_443);
        assert_eq!(find_longest_palindrome(&seq), find_longest_palindrome(&seq));
    }
}
