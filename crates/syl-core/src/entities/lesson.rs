use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CompletionState;
use crate::errors::CoreError;

/// Metadata for one curated lesson script.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LessonScript {
    pub id: String,
    pub title: String,
    /// Free-text tag, e.g. a CLI flag or a library feature.
    pub topic: String,
    /// The assistant or model that produced the script.
    pub origin_model: String,
    pub completion_state: CompletionState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// File the record was imported from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// Ordered lesson outline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<String>,
}

impl LessonScript {
    /// A new in-progress record created now, with no model or outline.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, topic: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            origin_model: String::new(),
            completion_state: CompletionState::default(),
            created_at: now,
            updated_at: now,
            summary: None,
            source_path: None,
            sections: Vec::new(),
        }
    }

    /// Check the fields every catalog record must carry.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the first empty field.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (field, value) in [("id", &self.id), ("title", &self.title), ("topic", &self.topic)] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_in_progress() {
        let lesson = LessonScript::new("1", "Understanding -v flag", "CLI");
        assert_eq!(lesson.completion_state, CompletionState::InProgress);
        assert_eq!(lesson.created_at, lesson.updated_at);
        assert!(lesson.validate().is_ok());
    }

    #[test]
    fn blank_topic_fails_validation() {
        let lesson = LessonScript::new("1", "Title", "   ");
        assert_eq!(
            lesson.validate(),
            Err(CoreError::Validation("topic must not be empty".into()))
        );
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let lesson = LessonScript::new("1", "Title", "CLI");
        let json = serde_json::to_value(&lesson).unwrap();
        assert!(json.get("summary").is_none());
        assert!(json.get("sections").is_none());
        assert_eq!(json["completion_state"], "in_progress");
    }
}
