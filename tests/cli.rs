#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> String {
    format!("{}/tests/fixtures/", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn plain_help_lists_flags() {
    Command::cargo_bin("cpgplot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-show"))
        .stdout(predicate::str::contains("--require-file-name"));
}

#[test]
fn plain_without_file_name_fails_when_required() {
    Command::cargo_bin("cpgplot")
        .unwrap()
        .args(["--require-file-name", "--no-show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No file specified"));
}

#[test]
fn plain_with_missing_file_fails() {
    let out = tempfile::tempdir().unwrap();
    Command::cargo_bin("cpgplot")
        .unwrap()
        .args(["nope.asc", &fixtures_dir(), "--no-show", "-o"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.asc"));
    assert!(!out.path().join("nope.svg").exists());
}

#[test]
fn plain_writes_svg() {
    let out = tempfile::tempdir().unwrap();
    Command::cargo_bin("cpgplot")
        .unwrap()
        .args(["run_Euler_0.0100.asc", &fixtures_dir(), "--no-show", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Plotting file from run_Euler_0.0100.asc"));
    let svg = std::fs::read_to_string(out.path().join("run_Euler_0.0100.svg")).unwrap();
    assert!(svg.contains("Time (ms)"));
}

#[test]
fn overlay_without_arguments_fails() {
    Command::cargo_bin("cpgplot-spikes")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn overlay_writes_spikes_svg() {
    let out = tempfile::tempdir().unwrap();
    Command::cargo_bin("cpgplot-spikes")
        .unwrap()
        .args([&fixtures_dir(), "run_Euler_0.0100.asc", "--no-show", "-o"])
        .arg(out.path())
        .assert()
        .success();
    assert!(out.path().join("run_Euler_0.0100_spikes.svg").exists());
}

#[test]
fn overlay_without_marker_reports_convention() {
    let out = tempfile::tempdir().unwrap();
    Command::cargo_bin("cpgplot-spikes")
        .unwrap()
        .args(["./data/run_Heun.asc", "--no-show", "-o"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Euler"));
}
