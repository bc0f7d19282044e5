//! The check command
//!
//! Resolves and loads the config, parses the reading, matches it and prints
//! the verdict.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::{ConfigLoader, TimeCheckConfig, resolve_config_path};
use crate::error::{ConfigError, Severity, TimeCheckError, ValidationIssue};
use crate::matcher::{MatchResult, find_closest};
use crate::timecode::{ParseOptions, format_hms, parse_time};

/// Line printed when the nearest legal time is too far away.
pub const REJECTED_MESSAGE: &str = "Timer rejected: deviation exceeds tolerance.";

/// Everything known about one checked reading.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    pub input_seconds: f64,
    pub closest: f64,
    pub closest_hms: String,
    pub deviation: f64,
    pub tolerance: f64,
    pub accepted: bool,
}

impl Report {
    fn new(input: &str, input_seconds: f64, tolerance: f64, result: MatchResult) -> Self {
        Self {
            input: input.to_string(),
            input_seconds,
            closest: result.closest,
            closest_hms: format_hms(result.closest),
            deviation: result.deviation,
            tolerance,
            accepted: result.accepted,
        }
    }

    /// Renders the single human-readable verdict line.
    #[must_use]
    pub fn human_line(&self) -> String {
        if self.accepted {
            format!("Closest legal time: {}/{}", self.closest, self.closest_hms)
        } else {
            REJECTED_MESSAGE.to_string()
        }
    }
}

/// Checks `cli.time` against the resolved config and writes the verdict.
///
/// # Errors
///
/// Returns a config error, a format error, or an I/O error from `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), TimeCheckError> {
    let path = resolve_config_path(cli.config.as_deref());
    let loaded = ConfigLoader::with_defaults().load(&path)?;
    for warning in &loaded.warnings {
        tracing::warn!(path = %path.display(), "{warning}");
    }

    let options = ParseOptions {
        strict_ranges: cli.strict,
    };
    let report = check(&cli.time, &loaded.config, options, &path)?;

    tracing::info!(
        input = %report.input,
        closest = report.closest,
        deviation = report.deviation,
        accepted = report.accepted,
        "reading checked"
    );

    match cli.format {
        OutputFormat::Human => writeln!(out, "{}", report.human_line())?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Parses `input` and matches it against `config`.
///
/// # Errors
///
/// Returns a format error for a malformed reading, or a config error if
/// `config` holds no legal times.
pub fn check(
    input: &str,
    config: &TimeCheckConfig,
    options: ParseOptions,
    source: &Path,
) -> Result<Report, TimeCheckError> {
    let input_seconds = parse_time(input, options)?;
    tracing::debug!(input, input_seconds, "parsed reading");

    let result = find_closest(input_seconds, &config.legal_times, config.tolerance).ok_or_else(
        || ConfigError::ValidationError {
            path: source.display().to_string(),
            errors: vec![ValidationIssue {
                path: "legal_times".to_string(),
                message: "must contain at least one legal time".to_string(),
                severity: Severity::Error,
            }],
        },
    )?;

    Ok(Report::new(input, input_seconds, config.tolerance, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn reference_config() -> TimeCheckConfig {
        TimeCheckConfig {
            legal_times: vec![5.0, 10.0, 15.0, 30.0, 60.0, 90.0, 120.0],
            tolerance: 0.6,
        }
    }

    fn check_reference(input: &str) -> Result<Report, TimeCheckError> {
        check(
            input,
            &reference_config(),
            ParseOptions::default(),
            Path::new("test.json"),
        )
    }

    #[test]
    fn accepted_line_shows_seconds_and_hms() {
        let report = check_reference("00:01:30.500").unwrap();
        assert_eq!(report.human_line(), "Closest legal time: 90/00:01:30");
    }

    #[test]
    fn fractional_legal_time_keeps_fraction() {
        let config = TimeCheckConfig {
            legal_times: vec![2.5],
            tolerance: 0.1,
        };
        let report = check(
            "00:00:02.500",
            &config,
            ParseOptions::default(),
            Path::new("test.json"),
        )
        .unwrap();
        assert_eq!(report.human_line(), "Closest legal time: 2.5/00:00:02");
    }

    #[test]
    fn zero_legal_time_prints_unsigned() {
        let loaded = ConfigLoader::with_defaults()
            .load_from_str(r#"{"legal_times": [-0], "tolerance": 0.5}"#)
            .unwrap();
        let report = check(
            "00:00:00.000",
            &loaded.config,
            ParseOptions::default(),
            Path::new("test.json"),
        )
        .unwrap();
        assert_eq!(report.human_line(), "Closest legal time: 0/00:00:00");
    }

    #[test]
    fn rejected_line() {
        let report = check_reference("00:00:05.700").unwrap();
        assert!(!report.accepted);
        assert_eq!(report.human_line(), REJECTED_MESSAGE);
    }

    #[test]
    fn malformed_reading_is_format_error() {
        let err = check_reference("5.5").unwrap_err();
        assert!(matches!(err, TimeCheckError::Format(_)));
    }

    #[test]
    fn empty_legal_times_is_config_error() {
        let config = TimeCheckConfig {
            legal_times: Vec::new(),
            tolerance: 1.0,
        };
        let err = check(
            "00:00:05.000",
            &config,
            ParseOptions::default(),
            Path::new("test.json"),
        )
        .unwrap_err();
        assert!(matches!(err, TimeCheckError::Config(_)));
    }

    #[test]
    fn run_writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let config_path: PathBuf = dir.path().join("cfg.json");
        std::fs::write(
            &config_path,
            r#"{"legal_times": [5, 10, 15, 30, 60, 90, 120], "tolerance": 0.6}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "timecheck",
            "--config",
            config_path.to_str().unwrap(),
            "--format",
            "json",
            "00:00:05.500",
        ])
        .unwrap();

        let mut out = Vec::new();
        run(&cli, &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["accepted"], true);
        assert_eq!(parsed["closest"], 5.0);
        assert_eq!(parsed["closest_hms"], "00:00:05");
        assert_eq!(parsed["deviation"], 0.5);
    }

    #[test]
    fn run_reports_missing_config() {
        let cli = Cli::try_parse_from([
            "timecheck",
            "--config",
            "/nonexistent/timecheck/cfg.json",
            "00:00:05.500",
        ])
        .unwrap();
        let mut out = Vec::new();
        let err = run(&cli, &mut out).unwrap_err();
        assert!(matches!(err, TimeCheckError::Config(ConfigError::MissingFile { .. })));
        assert!(out.is_empty());
    }
}
