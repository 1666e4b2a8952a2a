//! JSONL catalog file.
//!
//! One `LessonScript` per line. Reads tolerate blank lines; anything else that
//! fails to decode aborts the load with the offending line number. Writes go
//! to a temp file in the same directory and are renamed into place, so a
//! crash never leaves a half-written catalog.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_jsonlines::WriteExt;
use syl_core::entities::LessonScript;
use tempfile::NamedTempFile;

use crate::error::CatalogError;

/// Location of a persisted catalog.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record. A missing file is an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MalformedRecord` for an undecodable line, an
    /// invalid record, or a repeated id, and `CatalogError::Io` if the file
    /// cannot be read.
    pub fn load(&self) -> Result<Vec<LessonScript>, CatalogError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(error) => return Err(CatalogError::io(&self.path, error)),
        };

        let mut records = Vec::new();
        let mut seen = HashSet::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| CatalogError::io(&self.path, e))?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = index + 1;

            let record: LessonScript = serde_json::from_str(&line)
                .map_err(|e| self.malformed(line_no, e.to_string()))?;
            record
                .validate()
                .map_err(|e| self.malformed(line_no, e.to_string()))?;
            if !seen.insert(record.id.clone()) {
                return Err(self.malformed(line_no, format!("duplicate id '{}'", record.id)));
            }
            records.push(record);
        }

        tracing::debug!(path = %self.path.display(), records = records.len(), "catalog loaded");
        Ok(records)
    }

    /// Replace the file contents with `records`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` or `CatalogError::Persist` if the write or
    /// rename fails; the previous file is left intact in that case.
    pub fn save(&self, records: &[LessonScript]) -> Result<(), CatalogError> {
        let mut buf = Vec::new();
        buf.write_json_lines(records)
            .map_err(|e| CatalogError::io(&self.path, e))?;
        write_atomic(&self.path, &buf)?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "catalog saved");
        Ok(())
    }

    fn malformed(&self, line: usize, reason: String) -> CatalogError {
        CatalogError::MalformedRecord {
            path: self.path.display().to_string(),
            line,
            reason,
        }
    }
}

/// Write `contents` to `path` through a temp file in the same directory.
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the temp file cannot be written and
/// `CatalogError::Persist` if it cannot be renamed over `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CatalogError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| CatalogError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CatalogError::io(dir, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| CatalogError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| CatalogError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let file = CatalogFile::new(temp.path().join("catalog.jsonl"));
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_keeps_order() {
        let temp = TempDir::new().unwrap();
        let file = CatalogFile::new(temp.path().join("nested/catalog.jsonl"));
        let records = vec![
            LessonScript::new("b", "Second", "CLI"),
            LessonScript::new("a", "First", "CLI"),
        ];

        file.save(&records).unwrap();
        assert_eq!(file.load().unwrap(), records);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        let line = serde_json::to_string(&LessonScript::new("1", "T", "CLI")).unwrap();
        std::fs::write(&path, format!("\n{line}\n\n")).unwrap();

        assert_eq!(CatalogFile::new(&path).load().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_line_reports_line_number() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        let line = serde_json::to_string(&LessonScript::new("1", "T", "CLI")).unwrap();
        std::fs::write(&path, format!("{line}\n{{not json\n")).unwrap();

        let err = CatalogFile::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRecord { line: 2, .. }), "{err}");
    }

    #[test]
    fn repeated_id_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.jsonl");
        let line = serde_json::to_string(&LessonScript::new("1", "T", "CLI")).unwrap();
        std::fs::write(&path, format!("{line}\n{line}\n")).unwrap();

        let err = CatalogFile::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("duplicate id '1'"));
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.md");
        write_atomic(&path, b"# hello\n").unwrap();
        write_atomic(&path, b"# again\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# again\n");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }
}
