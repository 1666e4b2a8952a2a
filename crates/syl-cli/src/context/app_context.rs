use std::path::PathBuf;

use anyhow::Context;
use syl_catalog::CatalogStore;
use syl_config::SylConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: SylConfig,
    pub store: CatalogStore,
}

impl AppContext {
    /// Load the catalog named by `config` under `project_root`.
    pub fn init(project_root: PathBuf, config: SylConfig) -> anyhow::Result<Self> {
        let catalog_path = config.catalog.resolve(&project_root);
        let store = CatalogStore::open(&catalog_path)
            .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
        tracing::debug!(
            root = %project_root.display(),
            records = store.len(),
            "application context ready"
        );

        Ok(Self {
            project_root,
            config,
            store,
        })
    }

    /// Context over an empty in-memory catalog with default config.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            project_root: PathBuf::from("."),
            config: SylConfig::default(),
            store: CatalogStore::in_memory(),
        }
    }
}
