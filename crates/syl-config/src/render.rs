//! Markdown listing options.

use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Lesson Catalog".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Top-level heading of the rendered listing.
    #[serde(default = "default_title", deserialize_with = "crate::de::scalar_string")]
    pub title: String,

    #[serde(default = "default_true")]
    pub show_summary: bool,

    /// Include each script's lesson outline.
    #[serde(default)]
    pub show_sections: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_summary: true,
            show_sections: false,
        }
    }
}
