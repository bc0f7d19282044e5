//! Error types for `timecheck`
//!
//! Configuration and time-format failures, plus the exit code each one maps
//! to when the binary terminates.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `timecheck` invocations.
///
/// A rejected reading is still a successful run: the verdict was computed
/// and printed.
pub struct ExitCode;

impl ExitCode {
    /// Verdict printed (accepted or rejected)
    pub const SUCCESS: i32 = 0;

    /// Configuration error (missing file, invalid JSON, validation failure)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error while writing output
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Time string does not match `HH:MM:SS.mmm`
    pub const FORMAT_ERROR: i32 = 65;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `timecheck` operations.
#[derive(Debug, Error)]
pub enum TimeCheckError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed time string
    #[error(transparent)]
    Format(#[from] FormatError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TimeCheckError {
    /// Returns the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Format(_) => ExitCode::FORMAT_ERROR,
            Self::Io(_) | Self::Json(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Configuration validation failed
    #[error("validation failed for {path}: {}", summarize(errors))]
    ValidationError {
        /// Path to the configuration file
        path: String,
        /// List of validation issues found
        errors: Vec<ValidationIssue>,
    },

    /// Configuration file not found or unreadable
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

fn summarize(issues: &[ValidationIssue]) -> String {
    match issues {
        [] => "no details".to_string(),
        [only] => format!("{} at {}", only.message, only.path),
        [first, rest @ ..] => format!(
            "{} at {} (and {} more)",
            first.message,
            first.path,
            rest.len()
        ),
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single validation issue found in a configuration document.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// JSON path to the problematic field (e.g., "legal_times[2]")
    pub path: String,
    /// Description of the validation issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Prevents the configuration from being used
    Error,
    /// Reported but does not prevent loading
    Warning,
}

// ============================================================================
// Time Format Errors
// ============================================================================

/// A component of an `HH:MM:SS.mmm` time string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
        })
    }
}

/// Time string parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Not exactly two `:` separators
    #[error("time format must be hh:mm:ss.ms, got '{input}'")]
    WrongSeparatorCount {
        /// The rejected input
        input: String,
    },

    /// Seconds and milliseconds not separated by exactly one `.`
    #[error("seconds and milliseconds should be separated by a '.', got '{input}'")]
    MissingFraction {
        /// The rejected input
        input: String,
    },

    /// Component is empty or contains something other than ASCII digits
    #[error("{component} must be an unsigned integer, got '{text}'")]
    NonNumeric {
        /// Offending component
        component: Component,
        /// Raw text of the component
        text: String,
    },

    /// Component has the wrong number of digits
    #[error("{component} must have {expected} digits, got '{text}'")]
    WrongWidth {
        /// Offending component
        component: Component,
        /// Raw text of the component
        text: String,
        /// Human description of the accepted width
        expected: &'static str,
    },

    /// Component exceeds its clock range (strict mode only)
    #[error("{component} out of range: {value} (must be below 60)")]
    OutOfRange {
        /// Offending component
        component: Component,
        /// Parsed value
        value: u64,
    },

    /// Value too large to represent
    #[error("time value too large: '{input}'")]
    Overflow {
        /// The rejected input
        input: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `timecheck` operations.
pub type Result<T> = std::result::Result<T, TimeCheckError>;

// ============================================================================
// Tests
// ============================================================================
