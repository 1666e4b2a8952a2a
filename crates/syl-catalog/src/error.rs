//! Catalog error types.

use syl_core::errors::CoreError;
use thiserror::Error;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Lookup, uniqueness, or validation failure on a record.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The catalog file holds a line that is not a valid record.
    #[error("Malformed record in {path} at line {line}: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    /// Reading or writing the catalog file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The temporary file could not be renamed over the target.
    #[error("Failed to replace {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }

    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Core(CoreError::DuplicateId { .. }))
    }
}
