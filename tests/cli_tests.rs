//! End-to-end runs of the `forecaster` binary against fixture files.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use forecaster::testkit::files::{sample_workspace, write, SAMPLE_CSV};
use predicates::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn forecaster() -> Command {
    let mut cmd = cargo_bin_cmd!("forecaster");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn decimal(value: &serde_json::Value) -> Decimal {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("expected decimal string, got {value}"))
}

#[test]
fn run_prints_every_combination_and_totals() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    forecaster()
        .arg("--color")
        .arg("never")
        .arg("run")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario: base + vitol"))
        .stdout(predicate::str::contains("Scenario: low + met"))
        .stdout(predicate::str::contains("EBITDA comparison (EUR)"))
        .stdout(predicate::str::contains("1,600"))
        .stdout(predicate::str::contains("3,780"))
        .stderr(predicate::str::contains("Scenario not found; using an empty layer"))
        .stderr(predicate::str::contains("met"));
}

#[test]
fn run_summary_only_skips_scenario_reports() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    forecaster()
        .args(["--color", "never", "run", "--summary-only", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario: base + vitol").not())
        .stdout(predicate::str::contains("Total EBITDA by scenario"));
}

#[test]
fn run_json_reports_values_in_enumeration_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    let output = forecaster()
        .args(["--json", "run", "-c"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = value["scenarios"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        [
            "base + vitol",
            "base + gen-i",
            "base + met",
            "low + vitol",
            "low + gen-i",
            "low + met",
        ]
    );

    let base_met = &value["scenarios"][2]["series"]["EBITDA"];
    assert_eq!(decimal(&base_met["2025"]), dec!(1800));
    assert_eq!(decimal(&base_met["2026"]), dec!(1980));

    // `low` leaves 2026 blank, which resolves to zero.
    let low_vitol = &value["scenarios"][3]["series"]["EBITDA"];
    assert_eq!(decimal(&low_vitol["2025"]), dec!(400));
    assert_eq!(decimal(&low_vitol["2026"]), dec!(0));

    let totals = value["comparison"]["totals"].as_array().unwrap();
    assert_eq!(decimal(&totals[0]), dec!(3360));
    assert_eq!(decimal(&totals[1]), dec!(3150));
    assert!(value["failures"].as_array().unwrap().is_empty());
}

#[test]
fn run_writes_comparison_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());
    let out = dir.path().join("out").join("comparison.csv");

    forecaster()
        .args(["-q", "run", "-c"])
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("Year,base + vitol,base + gen-i,base + met,low + vitol,low + gen-i,low + met")
    );
    assert_eq!(lines.next(), Some("2025,1600,1500,1800,400,375,450"));
    assert_eq!(lines.next(), Some("2026,1760,1650,1980,0,0,0"));
    assert_eq!(lines.next(), Some("Total,3360,3150,3780,400,375,450"));
}

#[test]
fn run_scenario_flags_narrow_the_enumeration() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    let output = forecaster()
        .args(["--json", "run", "--base-revenue", "low", "--trader-cogs", "gen-i,met", "-c"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["comparison"]["labels"],
        serde_json::json!(["low + gen-i", "low + met"])
    );
}

#[test]
fn run_fails_without_common_layer() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    forecaster()
        .args(["run", "--common", "shared", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("'shared'"));
}

#[test]
fn run_fails_on_table_without_year_columns() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());
    let input = write(
        dir.path(),
        "no_years.csv",
        "scenario,category,parameter,const\ncommon,a,b,1\n",
    );

    forecaster()
        .args(["run", "-c"])
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no year columns"));
}

#[test]
fn run_fails_on_missing_identity_column() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());
    let input = write(dir.path(), "bad.csv", "scenario,parameter,2025\ncommon,x,1\n");

    forecaster()
        .args(["run", "-c"])
        .arg(&config)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'category'"));
}

#[test]
fn run_uses_defaults_when_no_config_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    write(&dir.path().join("data"), "inputs.csv", SAMPLE_CSV);

    forecaster()
        .current_dir(dir.path())
        .args(["--color", "never", "run", "--summary-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("low + met"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    forecaster()
        .current_dir(dir.path())
        .args(["run", "-c", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn resolve_prints_merged_series() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    let output = forecaster()
        .args([
            "--json",
            "resolve",
            "trader_cogs",
            "trader_cogs_percent",
            "--trader-cogs",
            "met",
            "-c",
        ])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scenario"], "base + met");
    assert_eq!(value["found"], true);
    // No `met` rows: the common constant is broadcast.
    assert_eq!(decimal(&value["values"]["2025"]), dec!(0.1));
    assert_eq!(decimal(&value["values"]["2026"]), dec!(0.1));
}

#[test]
fn resolve_unknown_parameter_is_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    let output = forecaster()
        .args(["--json", "resolve", "x", "nonexistent_param", "-c"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let logs = String::from_utf8_lossy(&output.stderr);
    assert!(logs.contains("Parameter not found; using 0"), "{logs}");
    assert!(logs.contains("nonexistent_param"), "{logs}");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], false);
    assert_eq!(decimal(&value["values"]["2025"]), dec!(0));
    assert_eq!(decimal(&value["values"]["2026"]), dec!(0));
}

#[test]
fn inputs_check_reports_missing_scenarios() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());

    forecaster()
        .args(["--color", "never", "inputs", "check", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("2025..2026 (2)"))
        .stdout(predicate::str::contains("'met' has no rows"));
}

#[test]
fn inputs_clean_writes_round_trip_layout() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_workspace(dir.path());
    let out = dir.path().join("clean.csv");

    forecaster()
        .args(["-q", "inputs", "clean", "-c"])
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let written = fs::read_to_string(&out).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("scenario,category,parameter,const,2025,2026")
    );
    assert_eq!(
        lines.next(),
        Some("common,net_revenue,Total gross margin (base),,1000,1100")
    );
    assert!(written.contains("low,net_revenue,Total gross margin (base),,500,\n"));
}
