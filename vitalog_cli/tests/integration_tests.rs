//! Integration tests for the vitalog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Meal and water logging round-trips through the day store
//! - The water goal ceiling and its warning path
//! - Goal-capped quick-add
//! - Meditation session runs and the completion journal

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary, pointed at a data dir
fn cli(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vitalog"));
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn test_cli_help() {
    Command::new(assert_cmd::cargo::cargo_bin!("vitalog"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal wellness tracker"));
}

#[test]
fn test_status_on_fresh_day() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Water Intake"))
        .stdout(predicate::str::contains("Calories"))
        .stdout(predicate::str::contains("Meditation"));
}

#[test]
fn test_meal_add_persists_across_invocations() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["meal", "add", "oatmeal", "--calories", "350", "--protein", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal logged"));

    cli(&data_dir)
        .args(["meal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oatmeal"))
        .stdout(predicate::str::contains("350 kcal"));
}

#[test]
fn test_meal_remove_absent_id_succeeds() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["meal", "remove", "999"])
        .assert()
        .success();
}

#[test]
fn test_water_ceiling_rejects_and_preserves_total() {
    let data_dir = setup_test_dir();

    for amount in ["250", "300", "250"] {
        cli(&data_dir)
            .args(["water", "add", amount])
            .assert()
            .success()
            .stdout(predicate::str::contains("Added"));
    }

    // Projected 2100 > 2000: rejected
    cli(&data_dir)
        .args(["water", "add", "1300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded"));

    cli(&data_dir)
        .args(["water", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 800 / 2000 ml"));
}

#[test]
fn test_water_rejects_malformed_amounts() {
    let data_dir = setup_test_dir();

    for bad in ["abc", "0", "-50"] {
        cli(&data_dir)
            .args(["water", "add", bad])
            .assert()
            .success()
            .stdout(predicate::str::contains("positive whole number"));
    }

    cli(&data_dir)
        .args(["water", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No water logged"));
}

#[test]
fn test_water_remove_last() {
    let data_dir = setup_test_dir();

    cli(&data_dir).args(["water", "add", "250"]).assert().success();
    cli(&data_dir).args(["water", "add", "500"]).assert().success();

    cli(&data_dir)
        .args(["water", "remove-last"])
        .assert()
        .success()
        .stdout(predicate::str::contains("250 ml total"));
}

#[test]
fn test_quick_add_clamps_at_goal() {
    let data_dir = setup_test_dir();

    cli(&data_dir).args(["water", "add", "1900"]).assert().success();

    // Increment 250 but only 100 of headroom
    cli(&data_dir)
        .args(["quick", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick-added 100"));

    cli(&data_dir)
        .args(["water", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2000 / 2000 ml"));

    // At goal: no-op
    cli(&data_dir)
        .args(["quick", "water"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already at goal"));
}

#[test]
fn test_quick_add_calories_shows_in_meals() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["quick", "calories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick-added 100"));

    cli(&data_dir)
        .args(["meal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick add"));
}

#[test]
fn test_goal_partial_update() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["goal", "set", "--calories", "1800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1800 kcal"))
        .stdout(predicate::str::contains("P 150"));
}

#[test]
fn test_meditate_list_shows_catalog() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["meditate", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deep_breathing"))
        .stdout(predicate::str::contains("body_scan"))
        .stdout(predicate::str::contains("sleep_meditation"))
        .stdout(predicate::str::contains("stress_relief"));
}

#[test]
fn test_meditate_run_completes_and_journals() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["meditate", "run", "deep_breathing", "--speed-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session complete"))
        .stdout(predicate::str::contains("5 min meditated"));

    cli(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("deep_breathing"));

    // Minutes credited show up in the projection
    cli(&data_dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meditation"));
}

#[test]
fn test_meditate_unknown_session() {
    let data_dir = setup_test_dir();

    cli(&data_dir)
        .args(["meditate", "run", "nope", "--speed-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown session"));
}
