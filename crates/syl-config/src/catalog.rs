//! Catalog file location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default catalog path, relative to the project root.
pub const DEFAULT_CATALOG_PATH: &str = ".syllabus/catalog.jsonl";

fn default_path() -> String {
    DEFAULT_CATALOG_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSONL catalog file. Relative paths resolve against the project root.
    #[serde(default = "default_path", deserialize_with = "crate::de::scalar_string")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl CatalogConfig {
    /// Resolve the catalog file against `project_root`.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }
}
