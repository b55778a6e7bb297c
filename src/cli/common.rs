//! Shared types and helpers for CLI commands.

use crate::codec::{self, LoadError, LoadReport};
use crate::models::{WidgetKind, WidgetSize};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Input was read but is invalid
    Validation = 1,
    /// File could not be read or written
    Io = 2,
    /// Bad arguments
    Usage = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by a command handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Invalid input (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Bad arguments (exit code 3).
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::Usage,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Reads a project file.
pub fn read_project_file(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))
}

/// Reads and decodes a project file.
pub fn load_project(path: &Path) -> CliResult<LoadReport> {
    let content = read_project_file(path)?;
    codec::decode(&content).map_err(|e: LoadError| {
        CliError::validation(format!("Failed to load project {}: {e}", path.display()))
    })
}

/// Parses a widget kind given on the command line (`homeScreen`, `home-screen`, ...).
pub fn parse_kind(value: &str) -> Result<WidgetKind, String> {
    parse_camel_enum(value).ok_or_else(|| format!("Unknown widget kind '{value}' (expected homeScreen or lockScreen)"))
}

/// Parses a widget size given on the command line (`small`, `extra-large`, ...).
pub fn parse_size(value: &str) -> Result<WidgetSize, String> {
    parse_camel_enum(value).ok_or_else(|| {
        format!(
            "Unknown widget size '{value}' (expected small, medium, large, extraLarge, \
             accessoryCircular, accessoryRectangular or accessoryInline)"
        )
    })
}

/// Accepts camelCase as well as kebab-case names of a camelCase serde enum.
fn parse_camel_enum<T: serde::de::DeserializeOwned>(value: &str) -> Option<T> {
    let mut camel = String::with_capacity(value.len());
    let mut upper_next = false;
    for c in value.chars() {
        if c == '-' || c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    serde_json::from_value(serde_json::Value::String(camel)).ok()
}
