//! Corruption recovery tests for the liftplan binary.
//!
//! These tests verify the system can handle:
//! - Corrupted settings files
//! - Corrupted journal files
//! - Missing files and directories

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("liftplan"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_corrupted_settings_file() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Create wal directory
    fs::create_dir_all(data_dir.join("wal")).unwrap();

    // Write corrupted settings file
    let settings_path = data_dir.join("wal/settings.json");
    fs::write(&settings_path, "{ invalid json }}}}").expect("Failed to write corrupted settings");

    // Plan falls back to default preferences (3-day beginner)
    cli()
        .arg("plan")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--seed")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day 3:"));
}

#[test]
fn test_corrupted_journal_lines_ignored() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Create wal directory with a corrupted journal
    fs::create_dir_all(data_dir.join("wal")).unwrap();
    let journal_path = data_dir.join("wal/performance_logs.wal");
    fs::write(&journal_path, "{ invalid json }\n{ more invalid }\n")
        .expect("Failed to write corrupted journal");

    // Progress still answers (no usable history)
    cli()
        .arg("progress")
        .arg("Squats")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No previous data"));

    // Logging appends past the garbage
    cli()
        .arg("log")
        .arg("Squats")
        .arg("--reps")
        .arg("8")
        .arg("--weight")
        .arg("100")
        .arg("--rir")
        .arg("2")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    // And the valid line is found afterwards
    cli()
        .arg("progress")
        .arg("Squats")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("For Squats:"));
}

#[test]
fn test_missing_data_dir_created_on_demand() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("does/not/exist/yet");

    cli()
        .arg("plan")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--seed")
        .arg("1")
        .assert()
        .success();

    assert!(data_dir.join("wal").exists());
}

#[test]
fn test_corrupted_csv_rows_skipped() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // A CSV with a valid header but a garbage row
    fs::write(
        data_dir.join("logs.csv"),
        "id,exercise_name,logged_at,sets_completed,reps_achieved,weight_lifted,rir_achieved,notes\n\
         not-a-uuid,Squats,not-a-date,3,8,100,2,\n",
    )
    .expect("Failed to write CSV");

    cli()
        .arg("summary")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sessions: 0"));
}
