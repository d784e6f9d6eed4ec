//! End-to-end CLI tests against the HTML fixtures in `tests/fixtures/`.
//!
//! Every command runs inside a temporary directory with an explicit `--state` file so the
//! severity store never leaks between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wcagcheck_test_util::{fixtures_dir, normalize_nondeterministic};

#[allow(deprecated)]
fn wcagcheck_cmd() -> Command {
    Command::cargo_bin("wcagcheck").expect("wcagcheck binary not found")
}

fn fixture(name: &str) -> PathBuf {
    fixtures_dir(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// A command running in `tmp` with its own state file.
fn cmd_in(tmp: &TempDir) -> Command {
    let mut cmd = wcagcheck_cmd();
    cmd.current_dir(tmp.path())
        .arg("--state")
        .arg(state_file(tmp));
    cmd
}

fn state_file(tmp: &TempDir) -> PathBuf {
    tmp.path().join("state").join("storage.json")
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("stdout is a JSON report")
}

fn audit_json(tmp: &TempDir, page: &Path, severity: Option<&str>) -> (i32, Value) {
    let mut cmd = cmd_in(tmp);
    cmd.arg("audit").arg(page);
    if let Some(level) = severity {
        cmd.args(["--severity", level]);
    }
    let output = cmd.output().expect("run wcagcheck");
    (
        output.status.code().expect("exit code"),
        stdout_json(&output.stdout),
    )
}

#[test]
fn accessible_page_passes_at_high() {
    let tmp = TempDir::new().unwrap();
    let (code, report) = audit_json(&tmp, &fixture("accessible.html"), Some("high"));

    assert_eq!(code, 0);
    assert_eq!(report["schema"], "wcagcheck.report.v1");
    assert_eq!(report["verdict"], "pass");
    let page = &report["pages"][0]["report"];
    assert_eq!(page["severity"], "high");
    assert_eq!(page["score"], 100);
    assert_eq!(page["grade"], "AAA");
    assert_eq!(page["categories"].as_array().unwrap().len(), 7);
}

#[test]
fn broken_page_fails_at_high_with_exit_code_2() {
    let tmp = TempDir::new().unwrap();
    let (code, report) = audit_json(&tmp, &fixture("broken.html"), Some("high"));

    assert_eq!(code, 2);
    assert_eq!(report["verdict"], "fail");
    let page = &report["pages"][0]["report"];
    assert_eq!(page["grade"], Value::Null);

    let codes: Vec<&str> = page["categories"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|c| c["violations"].as_array().into_iter().flatten())
        .map(|v| v["code"].as_str().unwrap())
        .collect();
    for expected in [
        "missing_h1",
        "img_missing_alt",
        "empty_link",
        "image_link_missing_alt",
        "low_contrast",
        "missing_label",
        "invalid_role",
        "missing_main_landmark",
        "negative_tabindex",
    ] {
        assert!(codes.contains(&expected), "missing {expected} in {codes:?}");
    }
    // Minor findings without the important marker stay hidden even at high.
    for hidden in ["heading_level_skip", "img_meaningless_alt", "generic_link_text"] {
        assert!(!codes.contains(&hidden), "unexpected {hidden}");
    }
}

#[test]
fn broken_page_passes_at_very_low() {
    let tmp = TempDir::new().unwrap();
    let (code, report) = audit_json(&tmp, &fixture("broken.html"), Some("very-low"));

    assert_eq!(code, 0);
    let page = &report["pages"][0]["report"];
    assert_eq!(page["score"], 100);
    assert_eq!(page["grade"], "AAA");
}

#[test]
fn repeated_runs_differ_only_in_run_metadata() {
    let tmp = TempDir::new().unwrap();
    let (_, first) = audit_json(&tmp, &fixture("broken.html"), Some("medium"));
    let (_, second) = audit_json(&tmp, &fixture("broken.html"), Some("medium"));
    assert_eq!(
        normalize_nondeterministic(first),
        normalize_nondeterministic(second)
    );
}

#[test]
fn directory_audit_applies_config_globs() {
    let tmp = TempDir::new().unwrap();
    let site = fixture("site");
    let output = cmd_in(&tmp)
        .arg("--config")
        .arg(site.join("wcagcheck.toml"))
        .args(["audit", "--dir"])
        .arg(&site)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let report = stdout_json(&output.stdout);
    let paths: Vec<&str> = report["pages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["docs/guide.html", "index.html"]);
    assert_eq!(report["pages"][0]["report"]["severity"], "high");
    assert_eq!(report["pages"][0]["report"]["grade"], "AA");
}

#[test]
fn markdown_format_prints_a_report() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .arg("audit")
        .arg(fixture("broken.html"))
        .args(["--severity", "high", "--format", "markdown"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("# wcagcheck report"))
        .stdout(predicate::str::contains("Grade: **Fail**"));
}

#[test]
fn html_format_writes_to_out() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("artifacts").join("report.html");
    cmd_in(&tmp)
        .arg("audit")
        .arg(fixture("accessible.html"))
        .args(["--format", "html", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("id=\"wcag-modal\""));
}

#[test]
fn md_renders_a_saved_report() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("report.json");
    cmd_in(&tmp)
        .arg("audit")
        .arg(fixture("broken.html"))
        .args(["--severity", "high", "--out"])
        .arg(&json)
        .assert()
        .code(2);

    cmd_in(&tmp)
        .args(["md", "--report"])
        .arg(&json)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Category | Passed | Status |"));
}

#[test]
fn md_rejects_a_foreign_report() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("other.json");
    std::fs::write(&json, r#"{"schema":"other.report.v1"}"#).unwrap();

    cmd_in(&tmp)
        .args(["md", "--report"])
        .arg(&json)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown report schema"));
}

#[test]
fn missing_page_is_a_runtime_error() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .args(["audit", "does-not-exist.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wcagcheck error:"));
}

#[test]
fn audit_without_pages_is_an_error() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .arg("audit")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no pages to audit"));
}

#[test]
fn invalid_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("wcagcheck.toml"), "severity = \"loud\"").unwrap();
    cmd_in(&tmp)
        .arg("audit")
        .arg(fixture("accessible.html"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid severity"));
}

#[test]
fn explain_known_and_unknown_identifiers() {
    wcagcheck_cmd()
        .args(["explain", "low_contrast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("How to fix"));

    wcagcheck_cmd()
        .args(["explain", "tables"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown category or rule code: tables"));
}

#[test]
fn settings_show_defaults_to_low() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("severity: low"))
        .stdout(predicate::str::contains("source: default"));
}

#[test]
fn saved_severity_drives_later_audits() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .args(["settings", "set", "very-low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("severity: very-low"));

    let stored: Value =
        serde_json::from_str(&std::fs::read_to_string(state_file(&tmp)).unwrap()).unwrap();
    assert_eq!(stored["wcagCheckerSeverity"], "very-low");

    cmd_in(&tmp)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source: store"));

    let (code, report) = audit_json(&tmp, &fixture("broken.html"), None);
    assert_eq!(code, 0);
    assert_eq!(report["pages"][0]["report"]["severity"], "very-low");

    // The flag applies to one run and is not persisted.
    let (code, _) = audit_json(&tmp, &fixture("broken.html"), Some("high"));
    assert_eq!(code, 2);
    let (code, _) = audit_json(&tmp, &fixture("broken.html"), None);
    assert_eq!(code, 0);
}

#[test]
fn settings_set_with_page_reports_the_new_grade() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .args(["settings", "set", "high", "--page"])
        .arg(fixture("broken.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("severity: high"))
        .stdout(predicate::str::contains(": Fail (score"));
}

#[test]
fn unknown_severity_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    cmd_in(&tmp)
        .args(["settings", "set", "loud"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown severity level: loud"));
    assert!(!state_file(&tmp).exists());
}
