use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FIXTURE: &str = "\
index,airline,flight,source_city,departure_time,stops,arrival_time,destination_city,class,duration,days_left,price
0,IndiGo,6E-201,Delhi,Morning,zero,Afternoon,Mumbai,Economy,2.17,10,5000
1,IndiGo,6E-202,Delhi,Evening,zero,Night,Mumbai,Economy,2.33,4,7000
2,Air_India,AI-101,Delhi,Early_Morning,one,Evening,Mumbai,Business,6.25,20,24000
3,GO_FIRST,G8-334,Mumbai,Late_Night,zero,Night,Delhi,Economy,2.0,3,6200
4,Vistara,UK-810,Kolkata,Morning,one,Night,Mumbai,Economy,5.5,15,9100
";

fn write_fixture(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("flights.csv");
    fs::write(&path, FIXTURE).unwrap();
    path
}

fn flightdeck() -> Command {
    Command::cargo_bin("flightdeck").unwrap()
}

#[test]
fn quote_reports_the_mean_fare() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .args([
            "--data",
            path.to_str().unwrap(),
            "quote",
            "--airline",
            "IndiGo",
            "--from",
            "Delhi",
            "--to",
            "Mumbai",
            "--class",
            "Economy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 flight(s) match"))
        .stdout(predicate::str::contains("6000.00₹"));
}

#[test]
fn quote_reports_no_matches_without_failing() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    // every value is in catalog, but Go First never flies Delhi to Mumbai
    flightdeck()
        .args([
            "--data",
            path.to_str().unwrap(),
            "quote",
            "--airline",
            "Go First",
            "--from",
            "Delhi",
            "--to",
            "Mumbai",
            "--class",
            "Economy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No flights match"));
}

#[test]
fn quote_rejects_out_of_catalog_airlines() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .args([
            "--data",
            path.to_str().unwrap(),
            "quote",
            "--airline",
            "Emirates",
            "--from",
            "Delhi",
            "--to",
            "Mumbai",
            "--class",
            "Economy",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Emirates"));
}

#[test]
fn missing_dataset_is_fatal_and_names_the_path() {
    flightdeck()
        .args(["--data", "/nonexistent/flights.csv", "overview"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flights.csv"));
}

#[test]
fn catalog_lists_canonical_labels() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .args(["--data", path.to_str().unwrap(), "catalog", "--column", "airline"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Air India"))
        .stdout(predicate::str::contains("Go First"))
        .stdout(predicate::str::contains("GO_FIRST").not());
}

#[test]
fn airlines_view_renders_both_tables() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .args(["--data", path.to_str().unwrap(), "airlines"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Flights per airline"))
        .stdout(predicate::str::contains("Mean fare per airline"))
        .stdout(predicate::str::contains("IndiGo"));
}

#[test]
fn overview_emits_json_when_asked() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    let output = flightdeck()
        .args([
            "--data",
            path.to_str().unwrap(),
            "overview",
            "--format",
            "json",
            "--raw",
            "2",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["records"], 5);
    assert_eq!(report["preview"].as_array().unwrap().len(), 2);
    assert_eq!(report["preview"][0]["airline"], "IndiGo");
}

#[test]
fn env_var_locates_the_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .env("FLIGHTDECK_DATA", path.to_str().unwrap())
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Flights per source city"))
        .stdout(predicate::str::contains("Delhi"));
}

#[test]
fn prices_view_renders_histogram_and_correlations() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir);
    flightdeck()
        .args(["--data", path.to_str().unwrap(), "prices", "--bins", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fare distribution"))
        .stdout(predicate::str::contains("Correlation matrix"))
        .stdout(predicate::str::contains("price"));
}
