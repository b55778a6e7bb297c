//! End-to-end tests for `widget-studio validate` command.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use serde_json::json;
use std::process::Command;

mod fixtures;

use fixtures::*;

/// Path to the widget-studio binary
fn widget_studio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_widget-studio")
}

fn run_validate(path: &str, extra: &[&str]) -> std::process::Output {
    Command::new(widget_studio_bin())
        .args(["validate", "--file", path])
        .args(extra)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_validate_clean_project() {
    let (path, temp) = create_temp_project_file(&test_project_basic());
    let output = run_validate(path.to_str().unwrap(), &["--json"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], true);
    assert_eq!(result["issues"].as_array().unwrap().len(), 0);
    assert_eq!(result["repairs"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_dropped_layer_passes_unless_strict() {
    let mut value = test_project_value();
    value["layers"][0]["element"]["type"] = json!("sparkle");
    let (path, temp) = create_temp_value_file(&value);

    let output = run_validate(path.to_str().unwrap(), &["--json"]);
    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let issues = result["issues"].as_array().unwrap();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0]["path"], "layers[0]");
    assert_eq!(issues[0]["action"], "dropped");

    let output = run_validate(path.to_str().unwrap(), &["--strict"]);
    assert_eq!(output.status.code(), Some(1), "Strict mode should fail");
}

#[test]
fn test_validate_duplicate_ids_fails() {
    let mut value = test_project_value();
    let id = value["layers"][0]["id"].clone();
    value["layers"][1]["id"] = id;
    let (path, temp) = create_temp_value_file(&value);

    let output = run_validate(path.to_str().unwrap(), &["--json"]);
    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["valid"], false);
    assert!(result["error"].as_str().unwrap().contains("layers[1]"));
}

#[test]
fn test_validate_syntax_error() {
    let (path, temp) = create_temp_file("broken.json", "{\"layers\": [");
    let output = run_validate(path.to_str().unwrap(), &[]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✗ Validation failed"));
}

#[test]
fn test_validate_missing_file() {
    let output = run_validate("/nonexistent/project.json", &[]);
    assert_eq!(output.status.code(), Some(2));
}
