//! CLI response types returned as JSON by `syl` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::LessonScript;

/// One row of `syl topics`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicCount {
    pub topic: String,
    pub count: u32,
}

/// A script that `syl import` did not add.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedImport {
    pub path: String,
    pub reason: String,
}

/// Response from `syl import`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub imported: Vec<LessonScript>,
    pub skipped: Vec<SkippedImport>,
}

/// Response from `syl init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitResponse {
    pub project_root: String,
    pub catalog_path: String,
    pub created: bool,
}

/// Response from `syl render --output`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenderResponse {
    pub path: String,
    pub entries: u32,
}
