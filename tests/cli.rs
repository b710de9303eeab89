use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

/// Points `VITAE_CONFIG` at a path that does not exist so tests run on
/// built-in defaults regardless of any config in the host's home directory.
fn vitae() -> Command {
    let mut cmd = Command::cargo_bin("vitae").unwrap();
    cmd.env("VITAE_CONFIG", "/nonexistent/vitae-test-config.toml");
    cmd
}

#[test]
fn test_cli_help() {
    vitae()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    vitae()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_show_whole_page_plain() {
    let output = vitae().args(["--plain", "show"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Everton Araújo"));
    assert!(stdout.contains("Experiência"));
    assert!(stdout.contains("Contato"));
    assert!(!stdout.contains('\u{1b}'), "plain output must not carry ANSI escapes");
}

#[test]
fn test_show_single_section_plain() {
    let output = vitae().args(["--plain", "show", "skills"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Redes"));
    assert!(stdout.contains("Zabbix"));
    assert!(!stdout.contains("Formação"), "other sections must not leak in");
}

#[test]
fn test_show_accepts_portuguese_anchor() {
    // The old page anchors ("habilidades", "sobre", ...) stay valid aliases.
    let output = vitae()
        .args(["--plain", "show", "habilidades"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Redes"));
}

#[test]
fn test_show_unknown_section_fails() {
    vitae()
        .args(["show", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section: bogus"));
}

#[test]
fn test_machine_error_envelope() {
    let output = vitae().args(["-m", "show", "bogus"]).output().unwrap();
    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"]["error"]["code"], "unknown_section");
    assert!(
        json["status"]["error"]["message"]
            .as_str()
            .unwrap()
            .contains("bogus")
    );
}

#[test]
fn test_sections_plain_lists_all() {
    let output = vitae().args(["--plain", "sections"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("home\t"));
    assert!(lines[5].starts_with("contact\t"));
}

#[test]
fn test_sections_machine_envelope() {
    let output = vitae().args(["-m", "sections"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], Value::String("ok".to_string()));

    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["id"], "home");
    assert_eq!(rows[0]["anchor"], 0);
    assert_eq!(rows[0]["hidden"], Value::Bool(false));
    // Anchors from one layout pass are strictly increasing.
    let anchors: Vec<u64> = rows.iter().map(|r| r["anchor"].as_u64().unwrap()).collect();
    assert!(anchors.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sections_hidden_via_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[nav]\nhidden = [\"education\"]\n").unwrap();

    let output = vitae()
        .args(["-m", "sections"])
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["data"].as_array().unwrap();

    let education = rows.iter().find(|r| r["id"] == "education").unwrap();
    assert_eq!(education["hidden"], Value::Bool(true));
    assert!(education["anchor"].is_null(), "hidden sections get no anchor");

    let contact = rows.iter().find(|r| r["id"] == "contact").unwrap();
    assert_eq!(contact["hidden"], Value::Bool(false));
    assert!(contact["anchor"].is_u64());
}

#[test]
fn test_hidden_sections_env_override() {
    let output = vitae()
        .env("VITAE_HIDDEN_SECTIONS", "education,contact")
        .args(["-m", "sections"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let hidden: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["hidden"] == Value::Bool(true))
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(hidden, ["education", "contact"]);
}

#[test]
fn test_invalid_env_override_fails() {
    vitae()
        .env("VITAE_SCROLL_STEP", "0")
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn test_export_machine_envelope() {
    let output = vitae().args(["-m", "export"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], Value::String("ok".to_string()));
    assert_eq!(json["data"]["profile"]["name"], "Everton Araújo");
    assert_eq!(json["data"]["skills"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["technologies"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"]["radar"].as_array().unwrap().len(), 6);
}

#[test]
fn test_export_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("portfolio.json");

    vitae()
        .arg("export")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["data"]["experience"].as_array().unwrap().len(), 7);
    assert_eq!(json["data"]["job"]["company"], "CDT Network LTDA");
}

#[test]
fn test_check_passes_on_shipped_content() {
    vitae()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}

#[test]
fn test_check_machine_reports_clean() {
    let output = vitae().args(["-m", "check"]).output().unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["clean"], Value::Bool(true));
    assert!(json["data"]["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_view_requires_interactive_terminal() {
    // Test harness pipes stdout, so the interactive page must refuse to start.
    vitae()
        .arg("view")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_bare_invocation_defaults_to_view() {
    vitae()
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_completions_bash() {
    vitae()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vitae"));
}
