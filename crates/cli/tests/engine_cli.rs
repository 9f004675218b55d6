use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn engine() -> Command {
    Command::cargo_bin("engine").expect("engine bin")
}

#[test]
fn analyze_prints_summary_for_defaults() {
    engine()
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("ROCKET ENGINE ANALYSIS"))
        .stdout(predicate::str::contains("RP-1/LOX"))
        .stdout(predicate::str::contains("Grade "));
}

#[test]
fn analyze_writes_json_and_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    let json_path = dir.path().join("results.json");
    let csv_path = dir.path().join("series").join("run.csv");

    engine()
        .args([
            "analyze",
            "--propellant",
            "lh2/lox",
            "--of",
            "6.0",
            "--pc",
            "50",
            "--injector",
            "swirl",
            "--seed",
            "11",
            "--quiet",
            "--json",
            json_path.to_str().expect("utf8 path"),
            "--csv",
            csv_path.to_str().expect("utf8 path"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read json"))
            .expect("parse json");
    assert_eq!(doc["generator"], "engine");
    assert_eq!(doc["parameters"]["propellant"], "lh2/lox");
    assert_eq!(doc["parameters"]["injector"], "swirl");
    assert_eq!(doc["parameters"]["noise_seed"], 11);
    assert_eq!(doc["results"]["propellant"]["name"], "LH2/LOX");

    let csv = fs::read_to_string(&csv_path).expect("read csv");
    assert_eq!(csv.lines().count(), 1_001);
}

#[test]
fn analyze_reads_parameter_file_and_applies_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    let params = dir.path().join("motor.yaml");
    fs::write(
        &params,
        "thrust_n: 5000.0\nchamber_pressure_bar: 70.0\nof_ratio: 0.0\nburn_time_s: 20.0\n\
         propellant: HTPB/AP\nexpansion_ratio: 12.0\nmaterial: Inconel 718\n\
         cycle: Pressure Fed\nnozzle: Conical (15°)\n",
    )
    .expect("write params");

    engine()
        .args(["analyze", "--params"])
        .arg(&params)
        .args(["--material", "Molybdenum (TZM)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solid motor"))
        .stdout(predicate::str::contains("Burn rate"))
        .stdout(predicate::str::contains("Molybdenum (TZM)"));
}

#[test]
fn catalog_lists_tables() {
    engine()
        .args(["catalog", "propellants"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RP-1/LOX"))
        .stdout(predicate::str::contains("HTPB/N2O"));

    engine()
        .args(["catalog", "nozzles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aerospike (Linear)"));
}

#[test]
fn compare_prints_one_row_per_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let kerolox = dir.path().join("kerolox.toml");
    let hydrolox = dir.path().join("hydrolox.toml");
    let base = "thrust_n = 1550.0\nchamber_pressure_bar = 35.0\nburn_time_s = 60.0\n\
                expansion_ratio = 40.0\nmaterial = \"Copper (OFHC)\"\n\
                cycle = \"Gas Generator\"\nnozzle = \"Bell (NASA-SP)\"\n";
    fs::write(
        &kerolox,
        format!("{base}propellant = \"RP-1/LOX\"\nof_ratio = 2.3\n"),
    )
    .expect("write kerolox");
    fs::write(
        &hydrolox,
        format!("{base}propellant = \"LH2/LOX\"\nof_ratio = 6.0\n"),
    )
    .expect("write hydrolox");

    engine()
        .args(["compare", "--params"])
        .arg(&kerolox)
        .arg("--params")
        .arg(&hydrolox)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration"))
        .stdout(predicate::str::contains("kerolox"))
        .stdout(predicate::str::contains("hydrolox"));
}

#[test]
fn unknown_propellant_fails() {
    engine()
        .args(["analyze", "--propellant", "Unobtainium/LOX"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unobtainium/LOX"));
}

#[test]
fn invalid_parameter_fails() {
    engine()
        .args(["analyze", "--thrust=inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("thrust_n"));
}
