//! Widget Studio - command-line access to widget projects
//!
//! Inspect, validate and create layered widget projects, resolve their data
//! bindings, and browse the built-in presets.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use widget_studio::cli::{
    CliResult, InspectArgs, LibraryArgs, NewArgs, PresetsArgs, ResolveArgs, ValidateArgs,
};
use widget_studio::constants::APP_NAME;

/// Widget Studio - layered widget projects from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a project's summary and paint order
    Inspect(InspectArgs),
    /// Validate a project file
    Validate(ValidateArgs),
    /// Resolve data bindings against host values
    Resolve(ResolveArgs),
    /// Browse gradients and verse-card templates
    Presets(PresetsArgs),
    /// Create a new project
    New(NewArgs),
    /// Manage the project library
    Library(LibraryArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Inspect(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Resolve(args) => args.execute(),
            Self::Presets(args) => args.execute(),
            Self::New(args) => args.execute(),
            Self::Library(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {}", e.message);
        std::process::exit(e.exit_code.code());
    }
}
