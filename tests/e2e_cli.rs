//! CLI end-to-end tests
//!
//! Tests for the concatrim command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the concatrim binary
#[allow(deprecated)]
fn concatrim_cmd() -> Command {
    Command::cargo_bin("concatrim").unwrap()
}

fn write_config(dir: &Path, source: &Path) -> std::path::PathBuf {
    let config_file = dir.join("concatrim.toml");
    fs::write(
        &config_file,
        format!(
            r#"
padding_ms = 100

[output]
dir = {out:?}
suffix = "_cut"

[[files]]
path = {source:?}
spans = [[300, 400], [100, 200], [500, 600]]
"#,
            out = dir.join("out").to_string_lossy(),
            source = source.to_string_lossy(),
        ),
    )
    .unwrap();
    config_file
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = concatrim_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = concatrim_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("concatrim"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = concatrim_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("concatrim "));
}

#[test]
fn test_cli_convert_help() {
    let mut cmd = concatrim_cmd();
    cmd.args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert timepoints"));
}

#[test]
fn test_cli_convert_to_trimmed() {
    let mut cmd = concatrim_cmd();
    cmd.args([
        "convert", "--span", "100:200", "--span", "300:400", "--span", "500:600", "--padding",
        "100", "150", "250", "50",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("150 -> 50"))
    .stdout(predicate::str::contains("250 -> -"))
    .stdout(predicate::str::contains("50 -> -"));
}

#[test]
fn test_cli_convert_to_original() {
    let mut cmd = concatrim_cmd();
    cmd.args([
        "convert", "--to", "original", "-s", "100:200", "-s", "300:400", "-s", "500:600", "-p",
        "0", "50", "150",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("50 -> 150"))
    .stdout(predicate::str::contains("150 -> 350"));
}

#[test]
fn test_cli_convert_without_spans_passes_through() {
    let mut cmd = concatrim_cmd();
    cmd.args(["convert", "500", "-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("500 -> 500"))
        .stdout(predicate::str::contains("-20 -> -20"));
}

#[test]
fn test_cli_convert_json() {
    let mut cmd = concatrim_cmd();
    let output = cmd
        .args(["convert", "--json", "-s", "100:200", "150", "250"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "timepoint": 150, "converted": 50 },
            { "timepoint": 250, "converted": null }
        ])
    );
}

#[test]
fn test_cli_convert_overlapping_spans_fails() {
    let mut cmd = concatrim_cmd();
    cmd.args(["convert", "-s", "0:10", "-s", "1:4", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("overlaps"));
}

#[test]
fn test_cli_convert_bad_span_fails() {
    let mut cmd = concatrim_cmd();
    cmd.args(["convert", "-s", "20:10", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid span"));
}

#[test]
fn test_cli_convert_negative_padding_fails() {
    let mut cmd = concatrim_cmd();
    cmd.args(["convert", "-s", "0:10", "--padding", "-5", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("padding"));
}

#[test]
fn test_cli_layout() {
    let mut cmd = concatrim_cmd();
    cmd.args(["layout", "-s", "300:400", "-s", "100:200", "-p", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] [100, 200] -> [0, 100]"))
        .stdout(predicate::str::contains("[1] [300, 400] -> [200, 300]"))
        .stdout(predicate::str::contains("Trimmed duration: 300 ms"));
}

#[test]
fn test_cli_layout_from_config_source() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("take.wav");
    fs::write(&source, b"RIFF").unwrap();
    let config_file = write_config(temp.path(), &source);

    let mut cmd = concatrim_cmd();
    let output = cmd
        .arg("--config")
        .arg(&config_file)
        .args(["layout", "--json", "--source"])
        .arg(&source)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["padding_ms"], 100);
    assert_eq!(json["spans"][0], serde_json::json!({ "start": 100, "end": 200 }));
    assert_eq!(json["trimmed"][2], serde_json::json!({ "start": 400, "end": 500 }));
    assert_eq!(json["trimmed_duration_ms"], 500);
}

#[test]
fn test_cli_plan() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("take.wav");
    fs::write(&source, b"RIFF").unwrap();
    let config_file = write_config(temp.path(), &source);

    let mut cmd = concatrim_cmd();
    let output = cmd.arg("-c").arg(&config_file).arg("plan").output().unwrap();
    assert!(output.status.success());

    let plans: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plans.as_array().unwrap().len(), 1);
    assert_eq!(
        plans[0]["output"],
        temp.path().join("out").join("take_cut.wav").to_string_lossy().as_ref()
    );
    assert_eq!(plans[0]["spans"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_plan_missing_source() {
    let temp = tempdir().unwrap();
    let config_file = write_config(temp.path(), &temp.path().join("missing.wav"));

    let mut cmd = concatrim_cmd();
    cmd.arg("-c")
        .arg(&config_file)
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_validate_config() {
    let temp = tempdir().unwrap();
    let source = temp.path().join("take.wav");
    let config_file = write_config(temp.path(), &source);

    let mut cmd = concatrim_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Padding: 100 ms"))
        .stdout(predicate::str::contains("(3 spans)"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("bad.toml");
    fs::write(
        &config_file,
        "[[files]]\npath = \"a.wav\"\nspans = [[0, 10], [10, 20]]\n",
    )
    .unwrap();

    let mut cmd = concatrim_cmd();
    cmd.arg("validate")
        .arg(&config_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("overlaps"));
}
