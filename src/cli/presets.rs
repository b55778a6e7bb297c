//! Preset catalog commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::presets::{self, GradientCategory, PresetCatalog, VerseCardCategory};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Browse built-in gradients and verse-card templates
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Catalog to list
    #[command(subcommand)]
    pub command: PresetsCommand,
}

/// Preset subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PresetsCommand {
    /// List gradient presets
    Gradients(ListGradientsArgs),
    /// List verse-card templates
    Templates(ListTemplatesArgs),
}

/// List gradient presets
#[derive(Debug, Clone, Args)]
pub struct ListGradientsArgs {
    /// Only this category (sunrise, ocean, nature, vibrant, dark, pastel)
    #[arg(long)]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// List verse-card templates
#[derive(Debug, Clone, Args)]
pub struct ListTemplatesArgs {
    /// Only this category (daily, peace, hope, praise, strength, wisdom, love)
    #[arg(long)]
    pub category: Option<String>,

    /// Hide premium templates
    #[arg(long)]
    pub free: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradientItem {
    id: String,
    name: String,
    category: GradientCategory,
    kind: String,
    colors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GradientsResponse {
    gradients: Vec<GradientItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateItem {
    id: String,
    name: String,
    category: VerseCardCategory,
    background: &'static str,
    premium: bool,
    show_reference: bool,
}

#[derive(Debug, Serialize)]
struct TemplatesResponse {
    templates: Vec<TemplateItem>,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let catalog = presets::catalog().map_err(|e| CliError::io(format!("{e:#}")))?;
        match &self.command {
            PresetsCommand::Gradients(args) => args.execute(catalog),
            PresetsCommand::Templates(args) => args.execute(catalog),
        }
    }
}

impl ListGradientsArgs {
    fn execute(&self, catalog: &PresetCatalog) -> CliResult<()> {
        let category = match &self.category {
            Some(id) => Some(GradientCategory::from_id(id).ok_or_else(|| {
                CliError::usage(format!("Unknown gradient category '{id}'"))
            })?),
            None => None,
        };

        let gradients: Vec<GradientItem> = catalog
            .gradients()
            .iter()
            .filter(|g| category.is_none_or(|c| g.category == c))
            .map(|g| GradientItem {
                id: g.id.clone(),
                name: g.name.clone(),
                category: g.category,
                kind: format!("{:?}", g.fill.kind).to_lowercase(),
                colors: g.fill.colors().iter().map(|c| c.to_hex()).collect(),
            })
            .collect();

        if self.json {
            return print_json(&GradientsResponse { gradients });
        }

        if gradients.is_empty() {
            println!("No gradients found");
            return Ok(());
        }
        println!("Gradients ({}):", gradients.len());
        for g in &gradients {
            println!(
                "  {:<16} {:<18} {:<8} {}",
                g.id,
                g.name,
                g.category.id(),
                g.colors.join(" ")
            );
        }
        Ok(())
    }
}

impl ListTemplatesArgs {
    fn execute(&self, catalog: &PresetCatalog) -> CliResult<()> {
        let category = match &self.category {
            Some(id) => Some(VerseCardCategory::from_id(id).ok_or_else(|| {
                CliError::usage(format!("Unknown template category '{id}'"))
            })?),
            None => None,
        };

        let templates: Vec<TemplateItem> = catalog
            .templates()
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| !(self.free && t.is_premium))
            .map(|t| TemplateItem {
                id: t.id.clone(),
                name: t.name.clone(),
                category: t.category,
                background: t.config.background.tag(),
                premium: t.is_premium,
                show_reference: t.config.show_reference,
            })
            .collect();

        if self.json {
            return print_json(&TemplatesResponse { templates });
        }

        if templates.is_empty() {
            println!("No templates found");
            return Ok(());
        }
        println!("Templates ({}):", templates.len());
        for t in &templates {
            let premium = if t.premium { " ★" } else { "" };
            println!(
                "  {:<18} {:<20} {:<9} {}{}",
                t.id,
                t.name,
                t.category.id(),
                t.background,
                premium
            );
        }
        Ok(())
    }
}
