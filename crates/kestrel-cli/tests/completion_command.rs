use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_kestrel_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("kestrel")
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("completion").arg("--shell").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_kestrel()"))
        .stdout(predicate::str::contains("complete -F _kestrel"));
}

#[test]
fn test_completion_zsh_generates_script() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("completion").arg("--shell").arg("zsh");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("#compdef kestrel"));
}

#[test]
fn test_completion_invalid_shell() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("completion").arg("--shell").arg("invalid-shell");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_completion_appears_in_main_help() {
    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("Generate shell completion"));
}

/// Smoke test the stats command end to end through the binary
#[test]
fn test_stats_command_json_output() {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join("nginx-access-ui.log-20190505");

    let mut cmd = Command::new(get_kestrel_bin());
    cmd.arg("stats").arg(&fixture).arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""url": "/index.html""#))
        .stdout(predicate::str::contains(r#""error_rate": 50.0"#));
}
