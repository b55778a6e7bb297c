//! Resolve command: fills data-binding layers from a value table.

use crate::cli::common::{load_project, print_json, read_project_file, CliError, CliResult};
use crate::codec;
use crate::config::Config;
use crate::services::binding::{
    BindingResolver, DefaultFormatter, SampleProvider, StaticProvider,
};
use crate::services::DataProvider;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Resolve data bindings of a project against host values
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to project JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// JSON object of values keyed by data type (placeholder text when omitted)
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the project with binding layers turned into text layers
    #[arg(long)]
    pub materialize: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BindingItem {
    layer_id: String,
    name: String,
    data_type: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct ResolveResponse {
    bindings: Vec<BindingItem>,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let report = load_project(&self.file)?;

        // Missing or broken config falls back to defaults; resolution still works
        let config = Config::load().unwrap_or_default();
        let formatter = DefaultFormatter::with_separator(config.render.locale_separator);

        match &self.values {
            Some(path) => {
                let json = read_project_file(path)?;
                let provider = StaticProvider::from_json(&json)
                    .map_err(|e| CliError::validation(format!("Invalid value table: {e:#}")))?;
                self.run(&report.project, provider, formatter, &config)
            }
            None => self.run(&report.project, SampleProvider, formatter, &config),
        }
    }

    fn run<P: DataProvider>(
        &self,
        project: &crate::models::WidgetProject,
        provider: P,
        formatter: DefaultFormatter,
        config: &Config,
    ) -> CliResult<()> {
        let resolver = BindingResolver::new(provider)
            .with_formatter(formatter)
            .with_default_style(config.render.format_style);
        let resolved = resolver.resolve_project(project);

        if self.materialize {
            let materialized = resolved.materialize();
            let output = if self.json {
                codec::encode_pretty(&materialized)
            } else {
                codec::encode(&materialized)
            }
            .map_err(|e| CliError::io(format!("Failed to encode project: {e}")))?;
            println!("{output}");
            return Ok(());
        }

        let bindings: Vec<BindingItem> = project
            .data_bindings()
            .map(|(id, binding)| BindingItem {
                layer_id: id.to_string(),
                name: project.layer(id).map(|l| l.name.clone()).unwrap_or_default(),
                data_type: binding.data_type.display_name().to_string(),
                text: resolved.text_for(id).unwrap_or_default().to_string(),
            })
            .collect();

        if self.json {
            return print_json(&ResolveResponse { bindings });
        }

        if bindings.is_empty() {
            println!("No data-binding layers");
            return Ok(());
        }
        for item in &bindings {
            println!("  {} ({}): {}", item.name, item.data_type, item.text);
        }
        Ok(())
    }
}
