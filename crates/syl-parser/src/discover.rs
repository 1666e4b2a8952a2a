//! Lesson script discovery.
//!
//! Directories are walked with the `ignore` crate, so `.gitignore` rules and
//! hidden directories are respected. Files named explicitly are always
//! included.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::ParseError;

/// Extension of lesson script files picked up from directories.
pub const SCRIPT_EXTENSION: &str = "py";

/// Expand `paths` into a sorted, de-duplicated list of script files.
///
/// # Errors
///
/// Returns `ParseError::Io` for a path that does not exist and
/// `ParseError::Walk` if a directory cannot be traversed.
pub fn discover<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>, ParseError> {
    let mut found = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|source| ParseError::Io {
            path: path.display().to_string(),
            source,
        })?;

        if metadata.is_file() {
            found.push(path.to_path_buf());
            continue;
        }

        for entry in WalkBuilder::new(path).build() {
            let entry = entry.map_err(|source| ParseError::Walk {
                path: path.display().to_string(),
                source,
            })?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && has_script_extension(entry.path()) {
                found.push(entry.into_path());
            }
        }
    }

    found.sort();
    found.dedup();
    tracing::debug!(count = found.len(), "lesson scripts discovered");
    Ok(found)
}

fn has_script_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
}
