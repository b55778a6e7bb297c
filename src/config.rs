//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{FormatStyle, WidgetKind, WidgetSize};
use crate::services::library::atomic_write;

/// Directory name under the platform config directory.
const CONFIG_DIR_NAME: &str = "WidgetStudio";

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Project library file (JSON Lines); defaults to `projects.jsonl` in the config dir
    pub library: Option<PathBuf>,
}

/// Defaults for newly created projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// Widget kind for new projects
    #[serde(default)]
    pub default_kind: WidgetKind,
    /// Widget size for new projects
    #[serde(default)]
    pub default_size: WidgetSize,
    /// Verse-card template applied to new projects
    #[serde(default)]
    pub default_template: Option<String>,
}

/// Binding resolution preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Style used for bindings that ask for the default style
    #[serde(default)]
    pub format_style: FormatStyle,
    /// Thousands separator for integers
    #[serde(default = "default_separator")]
    pub locale_separator: char,
}

const fn default_separator() -> char {
    ','
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format_style: FormatStyle::Default,
            locale_separator: default_separator(),
        }
    }
}

/// Application configuration.
///
/// # Validation
///
/// - `editor.default_size` must be available for `editor.default_kind`
/// - `editor.default_template` must name a built-in template (if set)
/// - `render.locale_separator` must not be a digit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// New-project defaults
    #[serde(default)]
    pub editor: EditorConfig,
    /// Resolution preferences
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/WidgetStudio/`
    /// - macOS: `~/Library/Application Support/WidgetStudio/`
    /// - Windows: `%APPDATA%\WidgetStudio\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Library file to use: the configured one or the default location.
    pub fn library_path(&self) -> Result<PathBuf> {
        match &self.paths.library {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("projects.jsonl")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path using atomic write.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        atomic_write(config_path, &content)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.editor.default_size.is_supported_by(self.editor.default_kind) {
            anyhow::bail!(
                "Default size {:?} is not available for {:?} widgets",
                self.editor.default_size,
                self.editor.default_kind
            );
        }

        if let Some(template_id) = &self.editor.default_template {
            let catalog = crate::presets::catalog()?;
            if catalog.template(template_id).is_none() {
                anyhow::bail!("Unknown default template '{}'", template_id);
            }
        }

        if self.render.locale_separator.is_ascii_digit() {
            anyhow::bail!(
                "Thousands separator cannot be a digit: '{}'",
                self.render.locale_separator
            );
        }

        Ok(())
    }
}
