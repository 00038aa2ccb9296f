//! End-to-end tests for the `carbon` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn carbon(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_carbon"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("CARBON_MODE")
        .env_remove("CARBON_CONTEXT")
        .env_remove("CARBON_FORMAT")
        .env_remove("CARBON_NODE_ENV")
        .env_remove("CARBON_DEBUG");
    cmd
}

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("client")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    fs::write(root.join("client/index.js"), "").unwrap();
    fs::write(root.join("public/index.html"), "<html></html>").unwrap();
    fs::write(root.join("public/favicon.ico"), [0u8; 4]).unwrap();
}

#[test]
fn resolve_development_prints_json_plan() {
    let dir = TempDir::new().unwrap();
    let output = carbon(dir.path())
        .args(["resolve", "--mode", "development"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["api_base_url"], "http://localhost:3000");
    assert_eq!(plan["source_maps"], "inline-full");
    assert_eq!(plan["optimization"]["enabled"], false);
    assert_eq!(plan["optimization"]["stages"], serde_json::json!([]));
}

#[test]
fn resolve_production_from_env() {
    let dir = TempDir::new().unwrap();
    let output = carbon(dir.path())
        .env("CARBON_MODE", "production")
        .args(["resolve", "--node-env", "production"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["api_base_url"], "https://carbon-footprint.herokuapp.com");
    assert_eq!(plan["source_maps"], "external-optimized");
    assert_eq!(
        plan["plugins"][4]["replacements"]["process.env.NODE_ENV"],
        "\"production\""
    );
}

#[test]
fn unrecognized_mode_fails_without_output() {
    let dir = TempDir::new().unwrap();
    carbon(dir.path())
        .args(["resolve", "--mode", "staging"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn missing_mode_fails() {
    let dir = TempDir::new().unwrap();
    carbon(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no build mode"));
}

#[test]
fn settings_file_supplies_mode_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("carbon.toml"),
        "mode = \"production\"\nformat = \"summary\"\n",
    )
    .unwrap();

    carbon(dir.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("mode:        production"))
        .stdout(predicate::str::contains("strip-console"));
}

#[test]
fn resolve_writes_plan_to_file() {
    let dir = TempDir::new().unwrap();
    carbon(dir.path())
        .args(["resolve", "-m", "production", "--out", "plan.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(dir.path().join("plan.json")).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(plan["mode"], "production");
}

#[test]
fn check_passes_on_complete_project() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());

    carbon(dir.path())
        .args(["check", "--mode", "production"])
        .assert()
        .success()
        .stderr(predicate::str::contains("All checks passed"));
}

#[test]
fn check_reports_missing_template() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("public/index.html")).unwrap();

    carbon(dir.path())
        .args(["check", "--mode", "development"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTML template not found"));
}

#[test]
fn resolve_with_default_color_settings() {
    let dir = TempDir::new().unwrap();
    let output = carbon(dir.path())
        .env_remove("NO_COLOR")
        .env("FORCE_COLOR", "1")
        .args(["--verbose", "resolve", "--mode", "development"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["mode"], "development");
}

#[test]
fn numeric_and_boolean_env_values_are_accepted() {
    for (value, literal) in [("1", "\"1\""), ("true", "\"true\"")] {
        let dir = TempDir::new().unwrap();
        let output = carbon(dir.path())
            .env("CARBON_DEBUG", value)
            .args(["resolve", "--mode", "production"])
            .output()
            .unwrap();
        assert!(output.status.success(), "CARBON_DEBUG={value}");

        let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(plan["plugins"][4]["replacements"]["process.env.DEBUG"], literal);
    }
}

#[test]
fn numeric_context_env_value_is_a_path() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("123")).unwrap();
    scaffold(&dir.path().join("123"));

    carbon(dir.path())
        .env("CARBON_CONTEXT", "123")
        .args(["check", "--mode", "development"])
        .assert()
        .success();
}

#[test]
fn production_without_node_env_warns() {
    let dir = TempDir::new().unwrap();
    carbon(dir.path())
        .args(["resolve", "--mode", "production"])
        .assert()
        .success()
        .stderr(predicate::str::contains("NODE_ENV unset"));

    carbon(dir.path())
        .args(["resolve", "--mode", "production", "--node-env", "production"])
        .assert()
        .success()
        .stderr(predicate::str::contains("NODE_ENV").not());
}

#[test]
fn quiet_check_prints_nothing_on_success() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());

    carbon(dir.path())
        .args(["--quiet", "check", "--mode", "production"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn quiet_still_reports_errors() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("public/favicon.ico")).unwrap();

    carbon(dir.path())
        .args(["-q", "check", "--mode", "development"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("favicon not found"));
}
