//! End-to-end tests for `widget-studio library` commands.
#![allow(unused_variables)] // Temp dirs must be kept alive even if not directly accessed

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;

use fixtures::*;

/// Path to the widget-studio binary
fn widget_studio_bin() -> &'static str {
    env!("CARGO_BIN_EXE_widget-studio")
}

fn run_library(library: &Path, args: &[&str]) -> std::process::Output {
    Command::new(widget_studio_bin())
        .arg("library")
        .args(args)
        .args(["--library", library.to_str().unwrap()])
        .output()
        .expect("Failed to execute command")
}

fn list_json(library: &Path) -> serde_json::Value {
    let output = run_library(library, &["list", "--json"]);
    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_library_add_list_favorite_remove() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("projects.jsonl");
    let (project_path, project_temp) = create_temp_project_file(&test_project_basic());

    let result = list_json(&library);
    assert_eq!(result["projects"].as_array().unwrap().len(), 0);

    let output = run_library(&library, &["add", "--file", project_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Added"));

    // Adding the same project again replaces it
    let output = run_library(&library, &["add", "--file", project_path.to_str().unwrap()]);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Replaced"));
    assert_eq!(fs::read_to_string(&library).unwrap().lines().count(), 1);

    let id = PROJECT_ID.to_string();
    let output = run_library(&library, &["favorite", "--id", &id]);
    assert_eq!(output.status.code(), Some(0));
    let result = list_json(&library);
    assert_eq!(result["projects"][0]["favorite"], true);
    assert_eq!(result["projects"][0]["layers"], 3);

    let output = run_library(&library, &["remove", "--id", &id]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(list_json(&library)["projects"].as_array().unwrap().len(), 0);
}

#[test]
fn test_library_skips_unreadable_lines() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("projects.jsonl");
    let good = widget_studio::codec::encode(&test_project_basic()).unwrap();
    fs::write(&library, format!("{good}\nnot json\n")).unwrap();

    let result = list_json(&library);
    assert_eq!(result["projects"].as_array().unwrap().len(), 1);
    assert_eq!(result["skippedLines"], serde_json::json!([2]));

    // Rewriting would lose the unreadable line
    let output = run_library(&library, &["favorite", "--id", &PROJECT_ID.to_string()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_library_unknown_id() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("projects.jsonl");
    let output = run_library(
        &library,
        &["remove", "--id", "00000000-0000-4000-8000-00000000ffff"],
    );
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_library_refuses_to_rewrite_degraded_project() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("projects.jsonl");
    let mut value = test_project_value();
    value["layers"][1]["element"] = serde_json::json!({ "type": "video", "payload": { "url": "clip.mov" } });
    fs::write(&library, format!("{value}\n")).unwrap();

    let result = list_json(&library);
    assert_eq!(result["projects"][0]["layers"], 2);
    assert_eq!(result["degradedProjects"], 1);

    let output = run_library(&library, &["favorite", "--id", &PROJECT_ID.to_string()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Refusing to rewrite"));

    let content = fs::read_to_string(&library).unwrap();
    assert!(content.contains("\"video\""));
    assert!(content.contains("clip.mov"));
}

#[test]
fn test_library_duplicate_id_line_is_skipped_and_kept() {
    let temp = TempDir::new().unwrap();
    let library = temp.path().join("projects.jsonl");
    let original = test_project_basic();
    let mut copy = original.clone();
    copy.name = "Shadow Copy".to_string();
    let content = format!(
        "{}\n{}\n",
        widget_studio::codec::encode(&original).unwrap(),
        widget_studio::codec::encode(&copy).unwrap()
    );
    fs::write(&library, &content).unwrap();

    let result = list_json(&library);
    assert_eq!(result["projects"].as_array().unwrap().len(), 1);
    assert_eq!(result["projects"][0]["name"], "Test Widget");
    assert_eq!(result["skippedLines"], serde_json::json!([2]));

    let output = run_library(&library, &["remove", "--id", &PROJECT_ID.to_string()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&library).unwrap(), content);
}
