//! # digipal - Palindrome Analysis for Integer Digits
//!
//! digipal decomposes a non-negative integer into its decimal digits and
//! analyzes them for palindromic structure.
//!
//! ## Features
//!
//! - **Whole-sequence check**: does the digit sequence read the same backward?
//! - **Longest run**: center-expansion search for the longest palindromic run,
//!   with the earliest run winning ties
//! - **Exact reconstruction**: runs are turned back into integers with
//!   arbitrary precision, so inputs of any length are supported
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust
//! use digipal::engine::{find_longest_palindrome, is_palindrome};
//! use digipal::types::DigitSequence;
//!
//! let seq = DigitSequence::from_u64(9123217);
//! assert!(!is_palindrome(&seq));
//!
//! let result = find_longest_palindrome(&seq);
//! assert_eq!(result.best_length(), 5);
//! assert_eq!(result.best_value().unwrap().to_string(), "12321");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Digit sequences, palindrome centers and spans
//! - [`engine`] - Palindrome check, center-expansion scan, reconstruction
//! - [`config`] - Settings management
//! - [`error`] - Error types
//! - [`output`] - Report types and output formatting

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use engine::{find_longest_palindrome, is_palindrome, reconstruct, ScanResult};
pub use error::{CliError, PalindromeError};
pub use types::{Center, DigitSequence, PalindromeSpan};
