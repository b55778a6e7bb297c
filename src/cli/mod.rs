//! CLI command handlers for Widget Studio.
//!
//! This module provides headless, scriptable access to the document model
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod inspect;
pub mod library;
pub mod new;
pub mod presets;
pub mod resolve;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use inspect::InspectArgs;
pub use library::LibraryArgs;
pub use new::NewArgs;
pub use presets::PresetsArgs;
pub use resolve::ResolveArgs;
pub use validate::ValidateArgs;
