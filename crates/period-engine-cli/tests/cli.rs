use assert_cmd::Command;
use predicates::prelude::*;

fn periods() -> Command {
    Command::cargo_bin("periods").unwrap()
}

fn stdout_json(args: &[&str]) -> serde_json::Value {
    let output = periods().args(args).output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── classify ────────────────────────────────────────────────────────────────

#[test]
fn test_classify_reports_all_families() {
    let v = stdout_json(&["classify", "2023-06-10"]);
    assert_eq!(v["date"], "2023-06-10");

    let periods = v["periods"].as_array().unwrap();
    let labels: Vec<&str> = periods.iter().map(|p| p["label"].as_str().unwrap()).collect();
    assert_eq!(labels, ["2023-T2", "2023-Q2", "2023-S1"]);

    assert_eq!(periods[1]["family"], "quadrimester");
    assert_eq!(periods[1]["index"], 2);
    assert_eq!(periods[1]["first_day"], "2023-05-01");
    assert_eq!(periods[1]["last_day"], "2023-08-31");
}

#[test]
fn test_classify_single_family_from_datetime() {
    let v = stdout_json(&["classify", "2024-12-31T23:59:59", "--family", "semester"]);
    let periods = v["periods"].as_array().unwrap();
    assert_eq!(periods.len(), 1);
    assert_eq!(periods[0]["label"], "2024-S2");
    assert_eq!(periods[0]["first_day"], "2024-07-01");
    assert_eq!(periods[0]["last_day"], "2024-12-31");
}

#[test]
fn test_classify_rejects_bad_date() {
    periods()
        .args(["classify", "2023-02-30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse"));
}

// ── boundary ────────────────────────────────────────────────────────────────

#[test]
fn test_boundary_defaults_to_first_day_of_current() {
    let v = stdout_json(&["boundary", "2023-08-20", "--family", "quadrimester"]);
    assert_eq!(v["result"], "2023-05-01");
    assert_eq!(v["period"], "2023-Q2");
    assert_eq!(v["direction"], "current");
    assert_eq!(v["kind"], "first");
}

#[test]
fn test_boundary_next_semester_last_day() {
    let v = stdout_json(&[
        "boundary",
        "2023-03-15",
        "-f",
        "semester",
        "-d",
        "next",
        "-k",
        "last",
    ]);
    assert_eq!(v["result"], "2023-12-31");
    assert_eq!(v["period"], "2023-S2");
}

#[test]
fn test_boundary_previous_crosses_year() {
    let v = stdout_json(&[
        "boundary",
        "2024-02-10",
        "-f",
        "trimester",
        "-d",
        "previous",
        "-k",
        "last",
    ]);
    assert_eq!(v["result"], "2023-12-31");
    assert_eq!(v["period"], "2023-T4");
}

#[test]
fn test_boundary_zoned_keeps_wall_clock() {
    let v = stdout_json(&[
        "boundary",
        "2023-03-15T22:00",
        "-f",
        "trimester",
        "-d",
        "next",
        "-z",
        "America/New_York",
    ]);
    assert_eq!(v["result"], "2023-04-01T22:00:00-04:00");
}

#[test]
fn test_boundary_zoned_start_of_day() {
    let v = stdout_json(&[
        "boundary",
        "2023-03-15T22:00",
        "-f",
        "trimester",
        "-d",
        "next",
        "-z",
        "America/New_York",
        "--start-of-day",
    ]);
    assert_eq!(v["result"], "2023-04-01T00:00:00-04:00");
}

#[test]
fn test_boundary_start_of_day_requires_timezone() {
    periods()
        .args(["boundary", "2023-03-15", "-f", "semester", "--start-of-day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--timezone"));
}

#[test]
fn test_boundary_unknown_timezone() {
    periods()
        .args(["boundary", "2023-03-15", "-f", "semester", "-z", "Mars/Olympus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timezone"));
}

// ── format ──────────────────────────────────────────────────────────────────

#[test]
fn test_format_default_grouping() {
    periods()
        .args(["format", "1234567.891"])
        .assert()
        .success()
        .stdout("1,234,567.89\n");
}

#[test]
fn test_format_european_separators() {
    periods()
        .args([
            "format",
            "1234567.891",
            "--decimal-separator",
            ",",
            "--grouping-separator",
            ".",
        ])
        .assert()
        .success()
        .stdout("1.234.567,89\n");
}

#[test]
fn test_format_negative_without_grouping() {
    periods()
        .args(["format", "-1234.5", "--no-grouping"])
        .assert()
        .success()
        .stdout("-1234.50\n");
}

#[test]
fn test_format_strip_trailing_zeros() {
    periods()
        .args(["format", "2.5", "--scale", "4", "--strip-trailing-zeros"])
        .assert()
        .success()
        .stdout("2.5\n");
}

#[test]
fn test_format_invalid_number() {
    periods()
        .args(["format", "twelve"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid decimal"));
}

#[test]
fn test_format_rejects_oversized_scale() {
    periods()
        .args(["format", "1", "--scale", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}
