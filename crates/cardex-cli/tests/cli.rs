use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const JANE_DOE: &str = "Jane Doe\nCEO\nAcme Corp Inc.\njane@acme.com\n+1 415-555-0100\n123 Main Street, Springfield, IL 62704\n";

fn cardex(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cardex").unwrap();
    // Keep the user's real config out of the way
    cmd.env("CARDEX_CONFIG", dir.path().join("config.json"));
    cmd
}

#[test]
fn parse_file_as_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, JANE_DOE).unwrap();

    let output = cardex(&dir).arg("parse").arg(&input).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["fullName"], "Jane Doe");
    assert_eq!(json["company"], "Acme Corp Inc.");
    assert_eq!(json["emails"][0]["value"], "jane@acme.com");
    assert_eq!(json["emails"][0]["type"], "work");
    assert_eq!(json["phones"][0]["isPrimary"], true);
    assert_eq!(json["address"]["postalCode"], "62704");
}

#[test]
fn parse_file_as_text() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    fs::write(&input, JANE_DOE).unwrap();

    cardex(&dir)
        .args(["parse", "--format", "text"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Jane Doe"))
        .stdout(predicate::str::contains("Company: Acme Corp Inc."))
        .stdout(predicate::str::contains("Phone (Mobile): +1 (415) 555-0100"));
}

#[test]
fn parse_reads_stdin() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["parse", "-"])
        .write_stdin(JANE_DOE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"fullName\":\"Jane Doe\""));
}

#[test]
fn parse_report_goes_to_stderr() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["parse", "--report", "-"])
        .write_stdin("+1 415-555-0100")
        .assert()
        .success()
        .stderr(predicate::str::contains("Could not extract email"));
}

#[test]
fn parse_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("card.txt");
    let output = dir.path().join("card.json");
    fs::write(&input, JANE_DOE).unwrap();

    cardex(&dir)
        .arg("parse")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"fullName\":\"Jane Doe\""));
}

#[test]
fn parse_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["parse", "no-such-card.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    let cards = dir.path().join("cards");
    let out = dir.path().join("out");
    fs::create_dir_all(&cards).unwrap();
    fs::write(cards.join("jane.txt"), JANE_DOE).unwrap();
    fs::write(cards.join("phone.txt"), "+1 415-555-0100").unwrap();
    fs::write(cards.join("ignored.png"), "not text").unwrap();

    cardex(&dir)
        .arg("batch")
        .arg(format!("{}/*", cards.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stderr(predicate::str::contains("Found 2 files"));

    assert!(out.join("jane.json").exists());
    assert!(out.join("phone.json").exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    let entries = summary.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["status"] == "success"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_init_set_get() {
    let dir = TempDir::new().unwrap();

    cardex(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.json").exists());

    cardex(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cardex(&dir)
        .args(["config", "set", "extraction.max_phones", "2"])
        .assert()
        .success();

    cardex(&dir)
        .args(["config", "get", "extraction.max_phones"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn config_set_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();

    cardex(&dir)
        .args(["config", "set", "extraction.min_phone_digits", "20"])
        .assert()
        .failure();

    cardex(&dir)
        .args(["config", "set", "extraction.max_phones", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_phones"));

    cardex(&dir)
        .args(["config", "get", "extraction.bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}

#[test]
fn explicit_config_is_used_by_parse() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"extraction": {"extra_job_titles": ["Chef"]}}"#).unwrap();

    cardex(&dir)
        .arg("-c")
        .arg(&config)
        .args(["parse", "-"])
        .write_stdin("Gordon Ramsay\nPastry Chef\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"jobTitle\":\"Pastry Chef\""));
}
