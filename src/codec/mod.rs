//! Persisted document format.
//!
//! A project is stored as one newline-free JSON object. Tagged unions are
//! written as `{"type": ..., "payload": ...}`; everything else is a plain
//! record with camelCase field names.

pub mod document;
pub mod error;
mod repair;

pub use document::{decode, decode_value, encode, encode_pretty, LoadReport};
pub use error::{DecodeError, DecodeIssue, IssueAction, LoadError, NodePath, Repair, ValidationError};
