// Integration tests for the riskcheck CLI.
//
// These tests use assert_cmd to invoke the binary and verify exit codes
// and report output. Profiles are written to temp dirs so that no
// riskcheck.toml from the working tree leaks into a test.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn riskcheck(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("riskcheck").expect("binary should exist");
    cmd.current_dir(dir);
    cmd
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("fixture should write");
    path
}

#[test]
fn cli_version_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("riskcheck"));
}

#[test]
fn cli_help_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Counterparty credit scoring"));
}

#[test]
fn score_requires_profile_path() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_missing_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .args(["score", "no-such-profile.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn score_rejects_malformed_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profile = write_file(&dir, "broken.json", "{ not json");

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("profile parse error"));
}

#[test]
fn score_reports_top_tier_for_blue_chip_profile() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profile = write_file(
        &dir,
        "blue_chip.json",
        r#"{
            "registration_date": "1995-01-10T00:00:00Z",
            "state_status": "ACTIVE",
            "capital": 50000000,
            "employees": 120,
            "finance": { "profit": 250000000, "revenue": 1200000000, "net_assets": 900000000 },
            "branch_count": 8,
            "is_public_company": true,
            "is_part_of_holding": true,
            "is_systemically_important": true
        }"#,
    );

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Highest reliability"))
        .stdout(predicate::str::contains("Credit terms up to 60 days"))
        .stdout(predicate::str::contains("+ Public joint-stock company"));
}

#[test]
fn score_blocks_on_distressed_profile() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profile = write_file(
        &dir,
        "distressed.json",
        r#"{
            "state_status": "LIQUIDATING",
            "bank_account_blocked": true,
            "in_rnp": true,
            "disqualified_director": true,
            "disqualified_founder": true
        }"#,
    );

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Extreme risk"))
        .stdout(predicate::str::contains("100% prepayment"));
}

#[test]
fn score_warns_when_negatives_exist_but_tier_is_acceptable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profile = write_file(
        &dir,
        "mixed.json",
        r#"{
            "state_status": "ACTIVE",
            "capital": 2000000,
            "employees": 60,
            "tax_penalties": true
        }"#,
    );

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- Tax fines and penalties"));
}

#[test]
fn score_honors_json_format_flag() {
    let dir = TempDir::new().expect("temp dir should be created");
    let profile = write_file(&dir, "empty.json", "{}");

    riskcheck(dir.path())
        .args(["score", "--format", "json"])
        .arg(&profile)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"final_score\": 50"))
        .stdout(predicate::str::contains("\"tier\": \"medium_risk\""));
}

#[test]
fn score_reads_default_format_from_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_file(&dir, "riskcheck.toml", "[report]\nformat = \"md\"\n");
    let profile = write_file(&dir, "empty.json", "{}");

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Counterparty Scoring Report"));
}

#[test]
fn score_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    write_file(&dir, "riskcheck.toml", "[report]\nformat = \"html\"\n");
    let profile = write_file(&dir, "empty.json", "{}");

    riskcheck(dir.path())
        .arg("score")
        .arg(&profile)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unsupported report.format"));
}

#[test]
fn check_blocks_on_liquidated_company() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        &dir,
        "liquidated.json",
        r#"{
            "name": { "short_with_opf": "Liquidated LLC" },
            "inn": "1234567890",
            "state": { "status": "LIQUIDATED" }
        }"#,
    );

    riskcheck(dir.path())
        .arg("check")
        .arg(&record)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Liquidated LLC"))
        .stdout(predicate::str::contains("⛔ Company has been liquidated"));
}

#[test]
fn check_passes_clean_active_company() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        &dir,
        "active.json",
        r#"{
            "name": { "short_with_opf": "Test LLC" },
            "inn": "1234567890",
            "ogrn": "1234567890123",
            "state": { "status": "ACTIVE" }
        }"#,
    );

    riskcheck(dir.path())
        .arg("check")
        .arg(&record)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("100/100"))
        .stdout(predicate::str::contains("✅ Check passed successfully"));
}

#[test]
fn check_renders_json_assessment() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        &dir,
        "active.json",
        r#"{ "state": { "status": "ACTIVE" } }"#,
    );

    riskcheck(dir.path())
        .args(["check", "--format", "json"])
        .arg(&record)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"risk_level\": \"low\""))
        .stdout(predicate::str::contains("\"score\": 100"));
}

#[test]
fn check_no_emoji_strips_markers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let record = write_file(
        &dir,
        "active.json",
        r#"{ "name": { "short_with_opf": "Plain LLC" }, "state": { "status": "ACTIVE" } }"#,
    );

    riskcheck(dir.path())
        .args(["check", "--no-emoji"])
        .arg(&record)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Company: Plain LLC"))
        .stdout(predicate::str::contains("🏢").not());
}

#[test]
fn validate_accepts_inn_and_ogrn() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .args(["validate", "1234567890"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("valid: 1234567890"));

    riskcheck(dir.path())
        .args(["validate", "123456789012345"])
        .assert()
        .code(0);
}

#[test]
fn parse_individual_line() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .args([
            "parse",
            "individual",
            "Ivanov Ivan Ivanovich, 01.01.1990, 123456789012",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"inn\": \"123456789012\""));
}

#[test]
fn parse_contract_line_rejects_bad_date() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .args(["parse", "contract", "C-1, 31.02.2024, 100000"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no result"));
}

#[test]
fn validate_rejects_malformed_identifiers() {
    let dir = TempDir::new().expect("temp dir should be created");
    riskcheck(dir.path())
        .args(["validate", "12345"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid"));
}
