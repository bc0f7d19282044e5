//! CLI command handlers

pub mod check;

use crate::cli::args::Cli;
use crate::error::TimeCheckError;

/// Run a parsed CLI invocation, writing the verdict to stdout.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, the time string is
/// malformed, or stdout cannot be written.
pub fn dispatch(cli: &Cli) -> Result<(), TimeCheckError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    check::run(cli, &mut out)
}
