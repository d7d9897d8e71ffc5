//! Positional reconstruction of digit ranges.
//!
//! Maps an inclusive digit range back to the integer it spells. A range that
//! starts with `0` reconstructs to a value with fewer decimal digits than the
//! range (`"021"` is 21); that is ordinary numeric semantics.

use crate::error::{EngineResult, PalindromeError};
use crate::types::DigitSequence;
use num_bigint::BigUint;
use num_traits::Zero;

/// Reconstruct `seq[start..=end]` as an arbitrary-precision integer.
pub fn reconstruct(seq: &DigitSequence, start: usize, end: usize) -> EngineResult<BigUint> {
    let digits = checked_range(seq, start, end)?;
    Ok(accumulate(digits))
}

/// Reconstruct `seq[start..=end]` as a `u64`.
///
/// Fails with [`PalindromeError::ArithmeticOverflow`] instead of wrapping when
/// the value does not fit.
pub fn reconstruct_u64(seq: &DigitSequence, start: usize, end: usize) -> EngineResult<u64> {
    let digits = checked_range(seq, start, end)?;
    digits
        .iter()
        .try_fold(0u64, |acc, &d| acc.checked_mul(10)?.checked_add(u64::from(d)))
        .ok_or(PalindromeError::ArithmeticOverflow {
            digits: digits.len(),
        })
}

/// Horner accumulation: `acc = acc * 10 + d` for each digit, most significant first.
pub(crate) fn accumulate(digits: &[u8]) -> BigUint {
    digits.iter().fold(BigUint::zero(), |acc, &d| acc * 10u32 + u32::from(d))
}

fn checked_range(seq: &DigitSequence, start: usize, end: usize) -> EngineResult<&[u8]> {
    if start > end || end >= seq.len() {
        return Err(PalindromeError::InvalidRange {
            start,
            end,
            len: seq.len(),
        });
    }
    Ok(&seq.as_slice()[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(literal: &str) -> DigitSequence {
        DigitSequence::from_digits(literal.bytes().map(|b| b - b'0').collect()).unwrap()
    }

    #[test]
    fn test_reconstruct_sub_range() {
        let s = seq("123456789");
        assert_eq!(reconstruct(&s, 2, 4).unwrap(), BigUint::from(345u32));
        assert_eq!(reconstruct(&s, 8, 8).unwrap(), BigUint::from(9u32));
        assert_eq!(reconstruct(&s, 0, 8).unwrap(), BigUint::from(123456789u32));
    }

    #[test]
    fn test_leading_zero_shortens_value() {
        let s = seq("9021");
        assert_eq!(reconstruct(&s, 1, 3).unwrap(), BigUint::from(21u32));
        assert_eq!(reconstruct_u64(&s, 1, 3).unwrap(), 21);
        assert_eq!(reconstruct(&s, 1, 1).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_invalid_range() {
        let s = seq("123");
        assert_eq!(
            reconstruct(&s, 2, 1),
            Err(PalindromeError::InvalidRange {
                start: 2,
                end: 1,
                len: 3
            })
        );
        assert!(reconstruct(&s, 0, 3).is_err());
        assert!(reconstruct(&DigitSequence::empty(), 0, 0).is_err());
    }

    #[test]
    fn test_u64_boundary() {
        let max = DigitSequence::from_u64(u64::MAX);
        assert_eq!(reconstruct_u64(&max, 0, max.len() - 1).unwrap(), u64::MAX);

        let over: DigitSequence = "18446744073709551616".parse().unwrap();
        assert_eq!(
            reconstruct_u64(&over, 0, over.len() - 1),
            Err(PalindromeError::ArithmeticOverflow { digits: 20 })
        );
        assert_eq!(
            reconstruct(&over, 0, over.len() - 1).unwrap(),
            BigUint::from(u64::MAX) + 1u32
        );
    }

    #[test]
    fn test_long_range_does_not_overflow() {
        let s = seq(&"9".repeat(200));
        let value = reconstruct(&s, 0, 199).unwrap();
        assert_eq!(value.to_string(), "9".repeat(200));
    }
}
