//! Project library commands.

use crate::cli::common::{load_project, print_json, CliError, CliResult};
use crate::config::Config;
use crate::services::{LibraryLoad, LibraryService};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Manage the saved project library
#[derive(Debug, Clone, Args)]
pub struct LibraryArgs {
    /// Library file (defaults to the configured library)
    #[arg(long, value_name = "FILE", global = true)]
    pub library: Option<PathBuf>,

    /// Library operation
    #[command(subcommand)]
    pub command: LibraryCommand,
}

/// Library subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum LibraryCommand {
    /// List saved projects
    List(ListProjectsArgs),
    /// Add or replace a project from a file
    Add(AddProjectArgs),
    /// Remove a project
    Remove(ProjectIdArgs),
    /// Toggle a project's favorite flag
    Favorite(ProjectIdArgs),
}

/// List saved projects
#[derive(Debug, Clone, Args)]
pub struct ListProjectsArgs {
    /// Only favorites
    #[arg(long)]
    pub favorites: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a project file to the library
#[derive(Debug, Clone, Args)]
pub struct AddProjectArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,
}

/// Select a project by id
#[derive(Debug, Clone, Args)]
pub struct ProjectIdArgs {
    /// Project id
    #[arg(long)]
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectItem {
    id: String,
    name: String,
    layers: usize,
    favorite: bool,
    template_id: Option<String>,
    modified_at: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    projects: Vec<ProjectItem>,
    skipped_lines: Vec<usize>,
    degraded_projects: usize,
}

impl LibraryArgs {
    /// Execute the library command
    pub fn execute(&self) -> CliResult<()> {
        let path = match &self.library {
            Some(path) => path.clone(),
            None => Config::load()
                .and_then(|config| config.library_path())
                .map_err(|e| CliError::io(format!("{e:#}")))?,
        };
        let loaded = LibraryService::load(&path).map_err(|e| CliError::io(format!("{e:#}")))?;

        match &self.command {
            LibraryCommand::List(args) => args.execute(&loaded),
            LibraryCommand::Add(args) => args.execute(loaded, &path),
            LibraryCommand::Remove(args) => {
                let mut loaded = loaded;
                let removed = loaded
                    .library
                    .remove(args.id)
                    .ok_or_else(|| CliError::validation(format!("No project with id {}", args.id)))?;
                save(&loaded, &path)?;
                println!("✓ Removed '{}'", removed.name);
                Ok(())
            }
            LibraryCommand::Favorite(args) => {
                let mut loaded = loaded;
                let favorite = loaded
                    .library
                    .toggle_favorite(args.id)
                    .ok_or_else(|| CliError::validation(format!("No project with id {}", args.id)))?;
                save(&loaded, &path)?;
                println!("✓ Favorite: {}", if favorite { "on" } else { "off" });
                Ok(())
            }
        }
    }
}

impl ListProjectsArgs {
    fn execute(&self, loaded: &LibraryLoad) -> CliResult<()> {
        let projects: Vec<ProjectItem> = loaded
            .library
            .iter()
            .filter(|p| !self.favorites || p.is_favorite)
            .map(|p| ProjectItem {
                id: p.id().to_string(),
                name: p.name.clone(),
                layers: p.len(),
                favorite: p.is_favorite,
                template_id: p.template_id.clone(),
                modified_at: p.modified_at.to_rfc3339(),
            })
            .collect();
        let skipped_lines: Vec<usize> = loaded.failures.iter().map(|f| f.line).collect();

        if self.json {
            return print_json(&ListResponse {
                projects,
                skipped_lines,
                degraded_projects: loaded.degraded,
            });
        }

        if projects.is_empty() {
            println!("No projects");
        } else {
            println!("Projects ({}):", projects.len());
            for p in &projects {
                let star = if p.favorite { "★" } else { " " };
                println!("  {} {} {:<24} {} layer(s)", star, p.id, p.name, p.layers);
            }
        }
        for failure in &loaded.failures {
            println!("  ⚠ line {} skipped: {}", failure.line, failure.error);
        }
        if loaded.degraded > 0 {
            println!(
                "  ⚠ {} project(s) loaded with dropped or repaired values",
                loaded.degraded
            );
        }
        Ok(())
    }
}

impl AddProjectArgs {
    fn execute(&self, mut loaded: LibraryLoad, path: &Path) -> CliResult<()> {
        let report = load_project(&self.file)?;
        let name = report.project.name.clone();
        let replaced = loaded.library.add(report.project);
        save(&loaded, path)?;

        if replaced.is_some() {
            println!("✓ Replaced '{name}'");
        } else {
            println!("✓ Added '{name}'");
        }
        Ok(())
    }
}

fn save(loaded: &LibraryLoad, path: &Path) -> CliResult<()> {
    if !loaded.failures.is_empty() {
        return Err(CliError::validation(format!(
            "Refusing to rewrite {}: {} line(s) could not be read",
            path.display(),
            loaded.failures.len()
        )));
    }
    // Re-encoding would persist the dropped nodes and clamped values.
    if loaded.degraded > 0 {
        return Err(CliError::validation(format!(
            "Refusing to rewrite {}: {} project(s) only loaded after dropping or repairing values",
            path.display(),
            loaded.degraded
        )));
    }
    LibraryService::save(&loaded.library, path).map_err(|e| CliError::io(format!("{e:#}")))
}
