//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === User Command Tests ===

#[test]
fn test_user_show_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("user").arg("show").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("case-insensitive"));
}

#[test]
fn test_user_add_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("user").arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--password-hash"));
}

#[test]
fn test_user_show_needs_a_key() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("user").arg("show");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--email"));
}

#[test]
fn test_user_show_rejects_both_keys() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.args(["user", "show", "--email", "a@b.c", "--id", "1"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// === Reservations Command Tests ===

#[test]
fn test_reservations_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("reservations").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Guest (user) id"));
}

// === Properties Command Tests ===

#[test]
fn test_properties_search_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties").arg("search").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("City substring"))
        .stdout(predicate::str::contains("--min-rating"));
}

#[test]
fn test_properties_add_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("properties").arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("cents"));
}

#[test]
fn test_properties_search_rejects_bad_price() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.args(["properties", "search", "--min-price", "cheap"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// === Seed Command Tests ===

#[test]
fn test_seed_help() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("seed").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Fixture file"));
}

// === Top Level ===

#[test]
fn test_top_level_help_lists_commands() {
    let mut cmd = Command::cargo_bin("lightbnb").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reservations"))
        .stdout(predicate::str::contains("properties"))
        .stdout(predicate::str::contains("seed"));
}
