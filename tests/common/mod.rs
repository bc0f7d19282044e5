//! Shared integration-test harness for running the `timecheck` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helpers for invoking the built `timecheck` binary.
pub struct TimeCheckProcess;

impl TimeCheckProcess {
    /// Builds a command with a clean environment for the binary.
    fn command(cwd: Option<&Path>) -> Command {
        let bin = env!("CARGO_BIN_EXE_timecheck");
        let mut command = Command::new(bin);
        command
            .env_remove("TIMECHECK_CONFIG")
            .env_remove("TIMECHECK_LOG_LEVEL")
            .env("NO_COLOR", "1");
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }
        command
    }

    /// Runs the binary with `args` and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Self::command(None)
            .args(args)
            .output()
            .expect("failed to run timecheck")
    }

    /// Runs the binary with `args` from inside `cwd`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command_in(cwd: &Path, args: &[&str]) -> Output {
        Self::command(Some(cwd))
            .args(args)
            .output()
            .expect("failed to run timecheck")
    }

    /// Runs the binary against a fixture config.
    #[allow(clippy::missing_panics_doc)]
    pub fn check_with_fixture(fixture: &str, args: &[&str]) -> Output {
        let config = Self::fixture_path(fixture);
        let mut full = vec!["--config", config.to_str().expect("non-UTF-8 fixture path")];
        full.extend_from_slice(args);
        Self::spawn_command(&full)
    }

    /// Returns the path to a file under `tests/fixtures`.
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}

/// Stdout of a finished process as a trimmed string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stderr of a finished process.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
