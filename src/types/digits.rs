//! Decimal digit sequences.
//!
//! A `DigitSequence` is the most-significant-first list of decimal digits of a
//! non-negative integer. It is immutable once built; every analysis in
//! [`crate::engine`] borrows it read-only.

use crate::error::PalindromeError;
use num_bigint::BigUint;
use serde::Serialize;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// An ordered, fixed-length list of decimal digits, most significant first.
///
/// Sequences built from an integer never start with `0` unless the integer
/// itself is zero, in which case the sequence is exactly `[0]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    /// The empty sequence.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Decompose `value` into its decimal digits.
    pub fn from_u64(value: u64) -> Self {
        if value == 0 {
            return Self(vec![0]);
        }

        let mut digits = Vec::with_capacity(20);
        let mut rest = value;
        while rest > 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        digits.reverse();
        Self(digits)
    }

    /// Decompose a signed value, rejecting negatives.
    pub fn from_i64(value: i64) -> Result<Self, PalindromeError> {
        u64::try_from(value)
            .map(Self::from_u64)
            .map_err(|_| PalindromeError::InvalidInput(format!("negative value {}", value)))
    }

    /// Build a sequence from raw digit values.
    ///
    /// Unlike the integer constructors this keeps leading zeros and accepts
    /// the empty list.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, PalindromeError> {
        if let Some(position) = digits.iter().position(|&d| d > 9) {
            let found = char::from_digit(u32::from(digits[position]) % 36, 36).unwrap_or('?');
            return Err(PalindromeError::InvalidDigit { found, position });
        }
        Ok(Self(digits))
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Digit at `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// The integer this sequence represents (zero for the empty sequence).
    pub fn value(&self) -> BigUint {
        if self.is_empty() {
            return BigUint::default();
        }
        // Full range is always in bounds.
        crate::engine::reconstruct(self, 0, self.len() - 1).unwrap_or_default()
    }

    /// Render as a bracketed list, e.g. `[1, 2, 1]`.
    pub fn to_list_string(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|d| d.to_string()).collect();
        format!("[{}]", parts.join(", "))
    }
}

impl Index<usize> for DigitSequence {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl From<u64> for DigitSequence {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl TryFrom<i64> for DigitSequence {
    type Error = PalindromeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Parses a non-negative decimal integer literal of any length.
///
/// Accepts an optional leading `+`; redundant leading zeros are dropped.
impl FromStr for DigitSequence {
    type Err = PalindromeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, body, offset) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..], 1),
            Some(b'+') => (false, &trimmed[1..], 1),
            _ => (false, trimmed, 0),
        };

        if body.is_empty() {
            return Err(PalindromeError::InvalidInput(format!(
                "'{}' is not an integer",
                trimmed
            )));
        }

        let mut digits = Vec::with_capacity(body.len());
        for (i, ch) in body.chars().enumerate() {
            let d = ch.to_digit(10).ok_or(PalindromeError::InvalidDigit {
                found: ch,
                position: i + offset,
            })?;
            digits.push(d as u8);
        }

        let first_nonzero = digits.iter().position(|&d| d != 0);
        let digits = match first_nonzero {
            Some(start) => digits.split_off(start),
            None => vec![0],
        };

        // "-0" is zero, anything else negative is rejected.
        if negative && digits != [0] {
            return Err(PalindromeError::InvalidInput(format!(
                "negative value {}",
                trimmed
            )));
        }

        Ok(Self(digits))
    }
}
