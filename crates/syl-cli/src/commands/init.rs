use std::path::Path;

use anyhow::Context;
use syl_catalog::write_atomic;
use syl_config::{PROJECT_DIR, SylConfig};
use syl_core::responses::InitResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::project_root_arg;
use crate::output::output;

/// Handle `syl init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match flags.project.as_deref() {
        Some(path) => project_root_arg(path)?,
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let response = run(&root, args.force)?;
    output(&response, flags.format)
}

/// Create `<root>/.syllabus` with a default `config.toml` and an empty
/// catalog. Existing files are left alone unless `force` rewrites the config;
/// the catalog is never truncated.
pub fn run(root: &Path, force: bool) -> anyhow::Result<InitResponse> {
    if !root.is_dir() {
        anyhow::bail!("invalid --project '{}': directory does not exist", root.display());
    }

    let project_dir = root.join(PROJECT_DIR);
    let created = !project_dir.is_dir();
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config_path = SylConfig::project_config_path(root);
    if force || !config_path.exists() {
        let contents = toml::to_string_pretty(&SylConfig::default())?;
        write_atomic(&config_path, contents.as_bytes())?;
        tracing::debug!(path = %config_path.display(), "wrote default config");
    }

    let config = SylConfig::load_with_dotenv(Some(root))?;
    let catalog_path = config.catalog.resolve(root);
    if !catalog_path.exists() {
        write_atomic(&catalog_path, b"")?;
        tracing::debug!(path = %catalog_path.display(), "created empty catalog");
    }

    Ok(InitResponse {
        project_root: root.display().to_string(),
        catalog_path: catalog_path.display().to_string(),
        created,
    })
}
