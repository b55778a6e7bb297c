//! New-project command.

use crate::cli::common::{parse_kind, parse_size, CliError, CliResult};
use crate::codec;
use crate::config::Config;
use crate::models::{WidgetKind, WidgetProject, WidgetSize};
use crate::presets;
use crate::services::library::atomic_write;
use clap::Args;
use std::path::PathBuf;

/// Create a new project, optionally from a verse-card template
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Project name (defaults to the template name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Verse-card template id (see `presets templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Widget kind (homeScreen, lockScreen)
    #[arg(long, value_parser = parse_kind)]
    pub kind: Option<WidgetKind>,

    /// Widget size (small, medium, large, extraLarge, accessoryCircular, ...)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<WidgetSize>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().unwrap_or_default();
        let kind = self.kind.unwrap_or(config.editor.default_kind);
        let size = self.size.unwrap_or(config.editor.default_size);

        let template_id = self.template.as_ref().or(config.editor.default_template.as_ref());
        let mut project = match template_id {
            Some(id) => {
                let catalog = presets::catalog().map_err(|e| CliError::io(format!("{e:#}")))?;
                let template = catalog
                    .template(id)
                    .ok_or_else(|| CliError::usage(format!("Unknown template '{id}'")))?;
                template.instantiate(kind, size)
            }
            None => WidgetProject::new("Untitled Widget", kind, size),
        };
        if let Some(name) = &self.name {
            project.name.clone_from(name);
        }

        project
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let encoded = if self.pretty {
            codec::encode_pretty(&project)
        } else {
            codec::encode(&project)
        }
        .map_err(|e| CliError::io(format!("Failed to encode project: {e}")))?;

        atomic_write(&self.out, &encoded)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Created '{}' ({} layer(s)) at {}",
            project.name,
            project.len(),
            self.out.display()
        );
        Ok(())
    }
}
