//! Smoke tests for the gstx binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn process_rejects_missing_file() {
    Command::cargo_bin("gstx")
        .unwrap()
        .args(["process", "no-such-file.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn process_rejects_malformed_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    Command::cargo_bin("gstx")
        .unwrap()
        .arg("process")
        .arg(&path)
        .assert()
        .failure();
}

#[test]
fn config_show_prints_defaults() {
    Command::cargo_bin("gstx")
        .unwrap()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ocr\""));
}

#[test]
fn batch_fails_on_empty_glob() {
    Command::cargo_bin("gstx")
        .unwrap()
        .args(["batch", "no-such-dir/*.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching PDF files"));
}
