//! Defaults applied by `syl import`.

use serde::{Deserialize, Serialize};
use syl_core::enums::CompletionState;

fn default_topic() -> String {
    "uncategorized".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportConfig {
    /// Topic for imported scripts when `--topic` is omitted.
    #[serde(default = "default_topic", deserialize_with = "crate::de::scalar_string")]
    pub default_topic: String,

    #[serde(default, deserialize_with = "crate::de::completion_state")]
    pub default_state: CompletionState,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            default_topic: default_topic(),
            default_state: CompletionState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ImportConfig::default();
        assert_eq!(config.default_topic, "uncategorized");
        assert_eq!(config.default_state, CompletionState::InProgress);
    }
}
