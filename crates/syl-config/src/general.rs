//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list/find commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Origin model recorded by `syl add` when `--model` is omitted.
    #[serde(default, deserialize_with = "crate::de::scalar_string")]
    pub default_model: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_model: String::new(),
        }
    }
}
