//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `digipal check <integer>` - Is the whole digit sequence a palindrome?
//! - `digipal longest <integer>` - Longest palindromic run of digits
//! - `digipal config` - Show or initialize settings

mod check;
mod config;
mod longest;

pub use check::CheckCommand;
pub use config::ConfigCommand;
pub use longest::LongestCommand;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// digipal - palindrome analysis for the digits of an integer.
///
/// Decomposes a non-negative integer into its decimal digits and reports
/// whether they form a palindrome, or finds the longest palindromic run.
#[derive(Parser, Debug)]
#[command(name = "digipal")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Palindrome analysis for integer digits", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "DIGIPAL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether the digits of an integer form a palindrome
    #[command(alias = "c", alias = "palindrome-check")]
    Check(CheckCommand),

    /// Find the longest palindromic run of digits in an integer
    #[command(alias = "l", alias = "longest-palindrome")]
    Longest(LongestCommand),

    /// Show or initialize the settings file
    Config(ConfigCommand),
}

/// Output format for results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}
