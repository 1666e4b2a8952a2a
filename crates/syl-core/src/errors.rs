//! Cross-cutting error types for Syllabus.
//!
//! Errors that any crate may raise about catalog records. Storage and parsing
//! failures live in their own crates (`CatalogError`, `ParseError`) and the
//! CLI converges everything on `anyhow`.

use thiserror::Error;

/// Errors about lesson script records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Record lookup returned no result.
    #[error("Lesson script not found: {id}")]
    NotFound { id: String },

    /// A record with this id is already in the catalog.
    #[error("Lesson script already exists: {id}")]
    DuplicateId { id: String },

    /// Data failed validation (empty fields, unknown enum values).
    #[error("Validation error: {0}")]
    Validation(String),
}
