//! End-to-end tests for the tscrub binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Command with the config directory pinned inside the sandbox so a user's
/// real config file cannot leak into the tests.
fn tscrub(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tscrub").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn cleans_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.log");
    fs::write(&input, "\x1b[31mred\x1b[0m ab\x08c\n").unwrap();

    tscrub(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned:"))
        .stdout(predicate::str::contains("1 file(s) cleaned"));

    assert_eq!(
        fs::read_to_string(dir.path().join("session_cleaned.log")).unwrap(),
        "red ac\n"
    );
}

#[test]
fn keep_backspace_flag_preserves_backspaces() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.log");
    fs::write(&input, "ab\x08c\n").unwrap();

    tscrub(dir.path())
        .arg("--keep-backspace")
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("session_cleaned.log")).unwrap(),
        "ab\x08c\n"
    );
}

#[test]
fn keep_bell_flag_preserves_bells() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("session.log");
    fs::write(&input, "a\x07b\n").unwrap();

    tscrub(dir.path())
        .arg("--keep-bell")
        .arg(&input)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("session_cleaned.log")).unwrap(),
        "a\x07b\n"
    );
}

#[test]
fn cleans_a_directory_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let work = dir.path().join("captures");
    fs::create_dir_all(work.join("nested")).unwrap();
    fs::write(work.join("one.log"), "a\x08b\n").unwrap();
    fs::write(work.join("nested").join("two.log"), "\x1b[1mbold\x1b[0m\n").unwrap();

    tscrub(dir.path())
        .arg(&work)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) cleaned"));

    assert_eq!(
        fs::read_to_string(work.join("one_cleaned.log")).unwrap(),
        "b\n"
    );
    assert_eq!(
        fs::read_to_string(work.join("nested").join("two_cleaned.log")).unwrap(),
        "bold\n"
    );
}

#[test]
fn rerun_skips_already_cleaned_output() {
    let dir = tempfile::tempdir().unwrap();
    let work = dir.path().join("captures");
    fs::create_dir_all(&work).unwrap();
    fs::write(work.join("session.log"), "ab\x08c\n").unwrap();

    tscrub(dir.path()).arg(&work).assert().success();

    tscrub(dir.path())
        .arg(&work)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 skipped"));
}

#[test]
fn missing_path_is_reported_and_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("real.log");
    fs::write(&input, "text\n").unwrap();

    tscrub(dir.path())
        .arg(dir.path().join("ghost.log"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    // The existing file was still cleaned
    assert!(dir.path().join("real_cleaned.log").exists());
}

#[test]
fn no_paths_prints_help() {
    let dir = tempfile::tempdir().unwrap();

    tscrub(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn completions_are_generated() {
    let dir = tempfile::tempdir().unwrap();

    tscrub(dir.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tscrub"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_file_supplies_flag_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("tscrub");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[clean]\nkeep_bell = true\n").unwrap();

    let input = dir.path().join("session.log");
    fs::write(&input, "a\x07b\n").unwrap();

    tscrub(dir.path()).arg(&input).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("session_cleaned.log")).unwrap(),
        "a\x07b\n"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn malformed_config_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("tscrub");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[clean\nbroken").unwrap();

    let input = dir.path().join("session.log");
    fs::write(&input, "text\n").unwrap();

    tscrub(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}
