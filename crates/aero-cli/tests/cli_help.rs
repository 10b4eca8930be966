use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_options_and_commands() {
    cargo_bin_cmd!("aero")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_help_shows_subcommands() {
    cargo_bin_cmd!("aero")
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("aero")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

#[test]
fn test_unknown_theme_is_rejected() {
    cargo_bin_cmd!("aero")
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("solarized"));
}

#[test]
fn test_shell_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("aero")
        .env("AERO_HOME", dir.path())
        .env_remove("AERO_CONFIG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("terminal"));

    assert!(dir.path().join("logs").join("aero.log").exists());
}
