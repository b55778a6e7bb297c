//! Inspect command: project summary and paint order.

use crate::cli::common::{load_project, print_json, CliResult};
use crate::constants::APP_BINARY_NAME;
use crate::models::WidgetProject;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Show a project's summary and paint order
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayerItem {
    z_index: i32,
    position: usize,
    id: String,
    name: String,
    element: &'static str,
    visible: bool,
    locked: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectResponse {
    id: String,
    name: String,
    widget_kind: String,
    widget_size: String,
    background: &'static str,
    layer_count: usize,
    binding_count: usize,
    normalized: bool,
    paint_order: Vec<LayerItem>,
    issues: usize,
    repairs: usize,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let report = load_project(&self.file)?;
        let response = build_response(&report.project, report.issues.len(), report.repairs.len());

        if self.json {
            return print_json(&response);
        }

        println!("Project: {} ({})", response.name, response.id);
        println!("  Widget:      {} / {}", response.widget_kind, response.widget_size);
        println!("  Background:  {}", response.background);
        println!("  Layers:      {}", response.layer_count);
        println!("  Bindings:    {}", response.binding_count);
        if !response.normalized {
            println!("  Z-indices have gaps (renumbered on next move)");
        }
        if response.issues > 0 || response.repairs > 0 {
            println!(
                "  ⚠ {} node(s) dropped, {} value(s) repaired (run `{} validate` for details)",
                response.issues, response.repairs, APP_BINARY_NAME
            );
        }

        println!("\nPaint order (back to front):");
        for item in &response.paint_order {
            let mut flags = String::new();
            if !item.visible {
                flags.push_str(" [hidden]");
            }
            if item.locked {
                flags.push_str(" [locked]");
            }
            println!(
                "  z={:<3} {:<12} {}{}",
                item.z_index, item.element, item.name, flags
            );
        }

        Ok(())
    }
}

fn build_response(project: &WidgetProject, issues: usize, repairs: usize) -> InspectResponse {
    let paint_order = project
        .sorted_layers()
        .iter()
        .map(|layer| LayerItem {
            z_index: layer.z_index(),
            position: project.position_of(layer.id()).unwrap_or_default(),
            id: layer.id().to_string(),
            name: layer.name.clone(),
            element: layer.element.tag(),
            visible: layer.is_visible,
            locked: layer.is_locked,
        })
        .collect();

    InspectResponse {
        id: project.id().to_string(),
        name: project.name.clone(),
        widget_kind: enum_name(&project.widget_kind),
        widget_size: enum_name(&project.widget_size),
        background: project.background.tag(),
        layer_count: project.len(),
        binding_count: project.data_bindings().count(),
        normalized: project.is_normalized(),
        paint_order,
        issues,
        repairs,
    }
}

/// Serialized name of a unit enum (`homeScreen`, `medium`, ...).
fn enum_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::new(),
    }
}
