//! Palindrome analysis over digit sequences.
//!
//! - [`is_palindrome`] checks the whole sequence in O(n).
//! - [`find_longest_palindrome`] finds the longest palindromic run in O(n²)
//!   by center expansion.
//! - [`reconstruct`] turns a digit range back into the integer it spells.
//!
//! All functions are pure and take the sequence by shared reference.

mod checker;
mod reconstructor;
mod scanner;

pub use checker::is_palindrome;
pub use reconstructor::{reconstruct, reconstruct_u64};
pub use scanner::{expand, find_longest_palindrome, ScanResult};
