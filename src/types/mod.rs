//! Core type definitions using newtype patterns for type safety.
//!
//! A `DigitSequence` can only hold values 0-9, and a `PalindromeSpan` can only
//! describe a non-empty window.

mod digits;
mod span;

pub use digits::DigitSequence;
pub use span::{Center, PalindromeSpan};
