//! Whole-sequence palindrome check.

use crate::types::DigitSequence;

/// Whether `seq` reads the same forward and backward.
///
/// Compares mirrored pairs from both ends toward the middle and stops at the
/// first mismatch. Empty and single-digit sequences are palindromes.
pub fn is_palindrome(seq: &DigitSequence) -> bool {
    let digits = seq.as_slice();
    let n = digits.len();
    (0..n / 2).all(|lo| digits[lo] == digits[n - 1 - lo])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromes() {
        for n in [0u64, 7, 11, 101, 1221, 12321, 101010101, 120021] {
            assert!(is_palindrome(&DigitSequence::from_u64(n)), "{n}");
        }
    }

    #[test]
    fn test_non_palindromes() {
        for n in [10u64, 12, 123, 1231, 123456789, 1200210] {
            assert!(!is_palindrome(&DigitSequence::from_u64(n)), "{n}");
        }
    }

    #[test]
    fn test_empty_sequence() {
        assert!(is_palindrome(&DigitSequence::empty()));
    }
}
