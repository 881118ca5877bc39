use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("vendors.json");
    fs::write(
        &path,
        r#"[
            {"id": "v-good", "businessName": "Adeola Kitchens", "rating": 4.5, "reviewCount": 20},
            {"id": "v-new", "businessName": "Fresh Start", "rating": 1.0, "reviewCount": 2},
            {"id": "v-bad", "businessName": "Slapdash Repairs", "rating": 1.5, "reviewCount": 12},
            {"id": "v-gone", "businessName": "Gone Ventures", "rating": 4.9, "blacklisted": true}
        ]"#,
    )
    .unwrap();
    path
}

fn run_json(input: &Path, subcommand: &[&str]) -> Value {
    let output = Command::cargo_bin("vendordir")
        .expect("binary")
        .args(subcommand)
        .arg("--input")
        .arg(input)
        .arg("--json")
        .output()
        .expect("command run");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn audit_reports_stats_and_suggestions() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path());

    let body = run_json(&input, &["audit"]);
    assert_eq!(body["stats"]["total"], 4);
    assert_eq!(body["stats"]["blacklisted"], 1);
    assert_eq!(body["stats"]["highly_rated"], 2);
    assert_eq!(body["stats"]["low_rated"], 2);

    // Only v-bad: low rating with enough reviews, not already blacklisted
    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["id"], "v-bad");
}

#[test]
fn top_lists_rated_vendors_descending_without_blacklisted() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path());

    let body = run_json(&input, &["top"]);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["v-good", "v-bad", "v-new"]);
}

#[test]
fn top_honors_limit_flag() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path());

    let body = run_json(&input, &["top", "--limit", "1"]);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "v-good");
}

#[test]
fn audit_text_output_names_suspicious_vendors() {
    let temp = tempdir().unwrap();
    let input = write_fixture(temp.path());

    Command::cargo_bin("vendordir")
        .expect("binary")
        .arg("audit")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicates::str::contains("blacklist suggestions"))
        .stdout(predicates::str::contains("Slapdash Repairs"));
}
