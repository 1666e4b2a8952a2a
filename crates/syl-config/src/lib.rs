//! # syl-config
//!
//! Layered configuration loading for Syllabus using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYLLABUS_*` prefix, `__` as separator)
//! 2. Project-level `.syllabus/config.toml`
//! 3. User-level `~/.config/syllabus/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYLLABUS_CATALOG__PATH` -> `catalog.path`,
//! `SYLLABUS_RENDER__SHOW_SECTIONS` -> `render.show_sections`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use syl_config::SylConfig;
//!
//! let config = SylConfig::load_with_dotenv(Some(Path::new("."))).expect("config");
//! println!("catalog: {}", config.catalog.path);
//! ```

mod catalog;
mod de;
mod error;
mod general;
mod import;
mod render;

pub use catalog::{CatalogConfig, DEFAULT_CATALOG_PATH};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use import::ImportConfig;
pub use render::RenderConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding the catalog and config.
pub const PROJECT_DIR: &str = ".syllabus";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SylConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

/// Read `.env` from the project root, or search from the current directory
/// when no root is known. Variables already set in the process win.
pub fn load_dotenv(project_root: Option<&Path>) {
    match project_root.map(|root| root.join(".env")) {
        Some(env_path) if env_path.exists() => {
            let _ = dotenvy::from_path(&env_path);
        }
        _ => {
            let _ = dotenvy::dotenv();
        }
    }
}

impl SylConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the project root (or the
    /// current directory when no root is known).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        load_dotenv(project_root);
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(root) = project_root {
            let local_path = Self::project_config_path(root);
            if local_path.exists() {
                figment = figment.merge(Toml::file(local_path));
            }
        }

        figment.merge(Env::prefixed("SYLLABUS_").split("__"))
    }

    /// Path of the project-level config file under `project_root`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("syllabus").join("config.toml"))
    }

    /// Reject values that would make every command fail later.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty catalog path, a zero
    /// default limit, or an empty default import topic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.import.default_topic.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "import.default_topic".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
