//! Widget Studio Library
//!
//! This library provides the document model behind the widget editor:
//! layered projects and their paint order, the persisted JSON format,
//! data-binding resolution, and the built-in preset catalogs.

// Module declarations
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod models;
pub mod presets;
pub mod services;
