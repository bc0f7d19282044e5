mod common;

use common::{TimeCheckProcess, stderr_of, stdout_of};

const CONFIG_ERROR: i32 = 2;

fn assert_config_error(fixture: &str, expected: &str) {
    let output = TimeCheckProcess::check_with_fixture(fixture, &["00:00:05.500"]);
    assert_eq!(
        output.status.code(),
        Some(CONFIG_ERROR),
        "{fixture} should fail with a config error: {}",
        stderr_of(&output)
    );
    assert!(stdout_of(&output).is_empty());
    let stderr = stderr_of(&output);
    assert!(
        stderr.contains(expected),
        "{fixture}: stderr should mention '{expected}': {stderr}"
    );
}

#[test]
fn missing_tolerance_rejected() {
    assert_config_error("missing_tolerance.json", "missing required field at tolerance");
}

#[test]
fn legal_times_not_array_rejected() {
    assert_config_error("legal_times_not_array.json", "must be an array of numbers");
}

#[test]
fn empty_legal_times_rejected() {
    assert_config_error("empty_legal_times.json", "at least one legal time");
}

#[test]
fn negative_tolerance_rejected() {
    assert_config_error("negative_tolerance.json", "must not be negative");
}

#[test]
fn invalid_json_rejected() {
    assert_config_error("bad_json.json", "parse error");
}

#[test]
fn empty_file_rejected() {
    assert_config_error("empty.json", "empty");
}

#[test]
fn missing_file_rejected() {
    let output = TimeCheckProcess::spawn_command(&[
        "--config",
        "/tmp/nonexistent_timecheck_config.json",
        "00:00:05.500",
    ]);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR));
    assert!(stderr_of(&output).contains("file not found"));
}

#[test]
fn config_error_wins_over_format_error() {
    let output = TimeCheckProcess::check_with_fixture("missing_tolerance.json", &["garbage"]);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR));
}

/// Unknown keys are reported but do not block the check.
#[test]
fn unknown_field_warns_but_passes() {
    let output = TimeCheckProcess::check_with_fixture("unknown_field.json", &["00:00:05.500"]);
    assert!(output.status.success(), "{}", stderr_of(&output));
    assert_eq!(stdout_of(&output), "Closest legal time: 5/00:00:05");
    assert!(
        stderr_of(&output).contains("did you mean 'tolerance'"),
        "warning expected: {}",
        stderr_of(&output)
    );
}

#[test]
fn quiet_suppresses_warnings() {
    let output =
        TimeCheckProcess::check_with_fixture("unknown_field.json", &["-q", "00:00:05.500"]);
    assert!(output.status.success());
    assert!(stderr_of(&output).is_empty());
}

#[test]
fn binary_content_rejected() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let bin_path = dir.path().join("binary.json");
    std::fs::write(&bin_path, b"\x00\x01\x02\x03\xff\xfe\xfd\xfc").unwrap();

    let output = TimeCheckProcess::spawn_command(&[
        "--config",
        bin_path.to_str().unwrap(),
        "00:00:05.500",
    ]);
    assert_eq!(output.status.code(), Some(CONFIG_ERROR));
    assert!(stderr_of(&output).contains("not valid UTF-8"));
}

#[test]
fn legal_times_limit_from_environment() {
    let config = TimeCheckProcess::fixture_path("time_config.json");
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_timecheck"))
        .env_remove("TIMECHECK_CONFIG")
        .env("TIMECHECK_MAX_LEGAL_TIMES", "3")
        .args(["--config", config.to_str().unwrap(), "00:00:05.500"])
        .output()
        .expect("failed to run timecheck");
    assert_eq!(output.status.code(), Some(CONFIG_ERROR));
    assert!(
        stderr_of(&output).contains("too many entries (7, limit 3)"),
        "limit should come from the environment: {}",
        stderr_of(&output)
    );
}
