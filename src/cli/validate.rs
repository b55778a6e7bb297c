//! Validation command for project files.

use crate::cli::common::{print_json, read_project_file, CliError, CliResult};
use crate::codec::{self, DecodeIssue, Repair};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a project file and report dropped or repaired nodes
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat dropped or repaired nodes as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    issues: Vec<DecodeIssue>,
    repairs: Vec<Repair>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let content = read_project_file(&self.file)?;

        let response = match codec::decode(&content) {
            Ok(report) => {
                let error = report.project.validate().err().map(|e| e.to_string());
                ValidateResponse {
                    valid: error.is_none(),
                    error,
                    issues: report.issues,
                    repairs: report.repairs,
                }
            }
            Err(e) => ValidateResponse {
                valid: false,
                error: Some(e.to_string()),
                issues: Vec::new(),
                repairs: Vec::new(),
            },
        };

        if self.json {
            print_json(&response)?;
        } else {
            if response.valid {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }
            if let Some(error) = &response.error {
                println!("  ✗ {error}");
            }

            if !response.issues.is_empty() {
                println!("\nDropped or replaced:");
                for issue in &response.issues {
                    println!("  ⚠ {issue}");
                }
            }
            if !response.repairs.is_empty() {
                println!("\nRepaired:");
                for repair in &response.repairs {
                    println!("  ⚠ {repair}");
                }
            }
        }

        if !response.valid {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && (!response.issues.is_empty() || !response.repairs.is_empty()) {
            return Err(CliError::validation(format!(
                "{} issue(s) and {} repair(s) found in strict mode",
                response.issues.len(),
                response.repairs.len()
            )));
        }

        Ok(())
    }
}
