//! Integration tests for the workout-report binary.
//!
//! These tests verify end-to-end behavior including:
//! - The demonstration report
//! - Package files (CSV, JSON)
//! - Configuration and flag precedence
//! - Fatal errors and exit status

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; \
Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.";

/// Helper to create a test directory, also used as an empty config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary isolated from the user's config
fn cli(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workout-report"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout metrics report"));
}

#[test]
fn test_demo_report() {
    let temp_dir = setup_test_dir();
    let stdout = stdout_of(&mut cli(temp_dir.path()));

    assert_eq!(
        stdout,
        format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE)
    );
}

#[test]
fn test_walking_true_division_flag() {
    let temp_dir = setup_test_dir();
    let stdout = stdout_of(cli(temp_dir.path()).args(["--walking-division", "true"]));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], SWIMMING_LINE);
    assert_eq!(lines[1], RUNNING_LINE);
    assert!(lines[2].ends_with("Потрачено ккал: 182.311."));
}

#[test]
fn test_csv_packages_in_input_order() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.csv");
    fs::write(&path, "RUN,15000,1,75\nSWM,720,1,80,25,40\n").unwrap();

    let stdout = stdout_of(cli(temp_dir.path()).arg("--packages").arg(&path));

    assert_eq!(stdout, format!("{}\n{}\n", RUNNING_LINE, SWIMMING_LINE));
}

#[test]
fn test_json_packages_and_json_output() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.json");
    fs::write(
        &path,
        r#"[{"workout_type": "WLK", "data": [9000, 1, 75, 180]}]"#,
    )
    .unwrap();

    let stdout = stdout_of(
        cli(temp_dir.path())
            .arg("--packages")
            .arg(&path)
            .args(["--format", "json"]),
    );

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["training_type"], "SportsWalking");
    assert!((value["calories"].as_f64().unwrap() - 157.5).abs() < 1e-6);
}

#[test]
fn test_config_file_settings() {
    let temp_dir = setup_test_dir();
    let packages = temp_dir.path().join("packages.csv");
    fs::write(&packages, "WLK,9000,1,75,180\n").unwrap();

    let config = temp_dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[formulas]\nwalking_division = \"true\"\n\n[input]\npackages = {:?}\n",
            packages.to_str().unwrap()
        ),
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Потрачено ккал: 182.311."))
        .stdout(predicate::str::contains("Running").not());
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("workout-report");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[report]\nformat = \"json\"\n").unwrap();

    let stdout = stdout_of(&mut cli(temp_dir.path()));
    for line in stdout.lines() {
        serde_json::from_str::<serde_json::Value>(line).expect("expected JSON lines");
    }
}

#[test]
fn test_flags_override_config() {
    let temp_dir = setup_test_dir();
    let config = temp_dir.path().join("custom.toml");
    fs::write(
        &config,
        "[formulas]\nwalking_division = \"true\"\n\n[report]\nformat = \"json\"\n",
    )
    .unwrap();

    let stdout = stdout_of(
        cli(temp_dir.path())
            .arg("--config")
            .arg(&config)
            .args(["--format", "text", "--walking-division", "floor"]),
    );

    assert_eq!(
        stdout,
        format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE)
    );
}

#[test]
fn test_unknown_workout_type_fails() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.csv");
    fs::write(&path, "RUN,15000,1,75\nXYZ,1,1,1\nWLK,9000,1,75,180\n").unwrap();

    cli(temp_dir.path())
        .arg("--packages")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Running"))
        .stdout(predicate::str::contains("SportsWalking").not())
        .stderr(predicate::str::contains("Invalid workout type"));
}

#[test]
fn test_arity_mismatch_fails() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.csv");
    fs::write(&path, "SWM,720,1,80,25\n").unwrap();

    cli(temp_dir.path())
        .arg("--packages")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("SWM expects 5 values, got 4"));
}

#[test]
fn test_zero_duration_fails_without_output() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.csv");
    fs::write(&path, "SWM,720,0,80,25,40\n").unwrap();

    cli(temp_dir.path())
        .arg("--packages")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn test_zero_height_fails_without_output() {
    let temp_dir = setup_test_dir();
    let path = temp_dir.path().join("packages.csv");
    fs::write(&path, "WLK,9000,1,75,0\n").unwrap();

    for division in ["floor", "true"] {
        cli(temp_dir.path())
            .arg("--packages")
            .arg(&path)
            .args(["--walking-division", division])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid value for height"));
    }
}

#[test]
fn test_missing_packages_file_fails() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("--packages")
        .arg(temp_dir.path().join("absent.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_invalid_format_value_rejected() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["--format", "xml"])
        .assert()
        .failure();
}
