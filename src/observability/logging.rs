//! Logging setup for `timecheck`.
//!
//! A run is one short-lived check, so log lines carry no target and, in
//! human format, no timestamp. Everything goes to stderr; stdout carries
//! only the verdict.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive that replaces the
/// `-v` count.
pub const LOG_LEVEL_ENV: &str = "TIMECHECK_LOG_LEVEL";

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain lines, colored when the terminal allows it.
    #[default]
    Human,
    /// One JSON object per line with event fields flattened.
    Json,
}

/// Level shown for a given number of `-v` flags; warnings are always on.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Whether human log lines should carry ANSI colors.
#[must_use]
pub const fn wants_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the stderr subscriber for this process.
///
/// A subscriber that is already installed (a second call, or a test
/// harness) is kept, and the refusal is logged through it at debug level.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .with_env_var(LOG_LEVEL_ENV)
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Human => {
            let ansi = wants_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            builder.with_ansi(ansi).without_time().try_init()
        }
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    };

    if let Err(err) = installed {
        tracing::debug!(%err, "keeping the existing log subscriber");
    }
}
