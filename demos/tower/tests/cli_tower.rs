//! End-to-end tests for the `tower` binary.

use std::path::Path;
use std::process::{Command, Output};

fn tower(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tower"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run tower")
}

fn write_manifest(dir: &Path, body: &str) -> String {
    let path = dir.join("Elevators.csv");
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

const MANIFEST: &str = "\
time,start,end
0,1,10
0,5,2
3,20,1
3,1,30
";

#[test]
fn prints_both_reports_and_reduction() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);

    let out = tower(&["--manifest", &manifest]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("=== Baseline (10 ticks per floor) ==="));
    assert!(stdout.contains("=== Proposed (5 ticks per floor) ==="));
    assert!(stdout.contains("=== Reduction ==="));
    assert_eq!(stdout.matches("Delivered passengers: 4").count(), 2);
}

#[test]
fn writes_csv_output_per_run() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let output = dir.path().join("out");

    let out = tower(&[
        "--manifest",
        &manifest,
        "--output",
        output.to_str().unwrap(),
        "--snapshot-interval",
        "10",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    for run in ["baseline", "proposed"] {
        for file in ["tick_summaries.csv", "elevator_snapshots.csv", "passengers.csv"] {
            assert!(output.join(run).join(file).exists(), "missing {run}/{file}");
        }
        let passengers = std::fs::read_to_string(output.join(run).join("passengers.csv")).unwrap();
        assert_eq!(passengers.lines().count(), 5); // header + 4
    }
}

#[test]
fn log_file_receives_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), "time,start,end\n0,1,3\nbad,row,here\n");
    let log = dir.path().join("tower.log");

    let out = tower(&["--manifest", &manifest, "--log-file", log.to_str().unwrap()]);
    assert!(out.status.success());

    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("WARN"));
    assert!(!text.contains('\x1b'), "log file must not contain ANSI escapes");
}

#[test]
fn missing_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.csv");
    let out = tower(&["--manifest", missing.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let out = tower(&["--manifest", &manifest, "--capacity", "0"]);
    assert!(!out.status.success());
}
