//! Error types for digipal.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or analyzing a digit sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalindromeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid digit '{found}' at position {position}")]
    InvalidDigit { found: char, position: usize },

    #[error("digit range {start}..={end} is out of bounds for a sequence of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    #[error("a {digits}-digit value does not fit in the target integer width")]
    ArithmeticOverflow { digits: usize },
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, PalindromeError>;

/// Errors raised while loading or saving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for subcommand handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Palindrome(#[from] PalindromeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for subcommand handlers.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindrome_error_messages() {
        let err = PalindromeError::InvalidDigit {
            found: 'x',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid digit 'x' at position 3");

        let err = PalindromeError::ArithmeticOverflow { digits: 25 };
        assert!(err.to_string().contains("25-digit"));
    }

    #[test]
    fn test_cli_error_is_transparent() {
        let err: CliError = PalindromeError::InvalidInput("negative value -5".into()).into();
        assert_eq!(err.to_string(), "invalid input: negative value -5");
    }
}
