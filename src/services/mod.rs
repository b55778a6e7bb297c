//! Service layer for business logic.
//!
//! This module contains services that operate on whole projects: resolving
//! data bindings for a render pass and persisting the project library.

pub mod binding;
pub mod library;

// Re-export commonly used types and functions
pub use binding::{
    resolve_binding, BindingResolver, DataProvider, DefaultFormatter, RawValue, ResolvedProject,
    SampleProvider, StaticProvider, ValueFormatter,
};
pub use library::{LibraryLoad, LibraryService, LineFailure, ProjectLibrary};
