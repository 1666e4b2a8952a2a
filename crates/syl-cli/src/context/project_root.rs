use std::path::{Path, PathBuf};

use anyhow::Context;
use syl_config::PROJECT_DIR;

/// Walk upwards from `start` until a `.syllabus` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Turn an explicit `--project` value into a project root. A path naming the
/// `.syllabus` directory itself resolves to its parent.
pub fn project_root_arg(path: &str) -> anyhow::Result<PathBuf> {
    let explicit = PathBuf::from(path);
    if explicit.file_name().is_some_and(|name| name == PROJECT_DIR) {
        return explicit
            .parent()
            .map(|parent| {
                if parent.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    parent.to_path_buf()
                }
            })
            .context("invalid --project path: '.syllabus' directory has no parent");
    }
    Ok(explicit)
}

/// Resolve the project root from `--project` or by searching upwards from the
/// current directory.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = project_root_arg(path)?;
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    let start = std::env::current_dir().context("failed to read current directory")?;
    find_project_root(&start)
        .context("not a syllabus project (no .syllabus directory found). Run 'syl init' first.")
}
