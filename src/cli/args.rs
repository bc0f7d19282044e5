//! CLI argument definitions
//!
//! Clap derive structs for `timecheck` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Check a timer reading against the legal times in a JSON config.
#[derive(Parser, Debug)]
#[command(name = "timecheck", author, version, about)]
pub struct Cli {
    /// Timer reading in hh:mm:ss.ms format (e.g. 00:01:30.250).
    ///
    /// Leading hyphens are taken as part of the reading so that a signed
    /// value reaches the time parser and is reported as a format error.
    #[arg(allow_hyphen_values = true)]
    pub time: String,

    /// Path to the JSON config file.
    ///
    /// When omitted, `time_config.json` is looked up in the current
    /// directory and then next to the executable.
    #[arg(short, long, env = "TIMECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reject minutes or seconds of 60 and above.
    #[arg(long)]
    pub strict: bool,

    /// Output format of the verdict.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control for logs.
    #[arg(long, default_value = "auto", env = "TIMECHECK_COLOR")]
    pub color: ColorChoice,

    /// Log line format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}
