//! Status enums for Syllabus.
//!
//! Serialized with `snake_case` names via `#[serde(rename_all = "snake_case")]`.
//! There is no transition table: a lesson script may move between any two
//! states, and an unfinished script is still worth keeping.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// CompletionState
// ---------------------------------------------------------------------------

/// How far the author got with a lesson script.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    Complete,
    AbandonedButUseful,
    #[default]
    InProgress,
}

impl CompletionState {
    pub const ALL: [Self; 3] = [Self::Complete, Self::AbandonedButUseful, Self::InProgress];

    /// Return the serialized representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::AbandonedButUseful => "abandoned_but_useful",
            Self::InProgress => "in_progress",
        }
    }

    /// Human-readable label used in rendered listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::AbandonedButUseful => "abandoned but useful",
            Self::InProgress => "in progress",
        }
    }
}

impl fmt::Display for CompletionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `InProgress`, `in-progress`, `in_progress`, `in progress`, and the
/// `abandoned` shorthand.
impl FromStr for CompletionState {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "complete" => Ok(Self::Complete),
            "abandonedbutuseful" | "abandoned" => Ok(Self::AbandonedButUseful),
            "inprogress" => Ok(Self::InProgress),
            _ => Err(CoreError::Validation(format!(
                "invalid completion state '{raw}' (expected complete, abandoned_but_useful or in_progress)"
            ))),
        }
    }
}
