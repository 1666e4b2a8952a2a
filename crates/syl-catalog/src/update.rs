//! Lesson script update builder.
//!
//! A record's topic and completion state are the only fields that change
//! after creation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;
use syl_core::errors::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LessonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_state: Option<CompletionState>,
}

impl LessonUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.topic.is_none() && self.completion_state.is_none()
    }

    /// Check the update before touching a record.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank topic.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.topic.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::Validation("topic must not be empty".into()));
        }
        Ok(())
    }

    /// Apply the set fields to `lesson` and bump `updated_at`.
    pub fn apply(&self, lesson: &mut LessonScript, now: DateTime<Utc>) {
        if let Some(topic) = &self.topic {
            lesson.topic.clone_from(topic);
        }
        if let Some(state) = self.completion_state {
            lesson.completion_state = state;
        }
        lesson.updated_at = now;
    }
}

pub struct LessonUpdateBuilder(LessonUpdate);

impl LessonUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LessonUpdate::default())
    }

    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.0.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub const fn completion_state(mut self, state: CompletionState) -> Self {
        self.0.completion_state = Some(state);
        self
    }

    #[must_use]
    pub fn build(self) -> LessonUpdate {
        self.0
    }
}

impl Default for LessonUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_noop() {
        assert!(LessonUpdateBuilder::new().build().is_empty());
    }

    #[test]
    fn apply_sets_only_given_fields() {
        let mut lesson = LessonScript::new("1", "Title", "CLI");
        let created = lesson.created_at;
        let later = created + chrono::Duration::minutes(5);

        LessonUpdateBuilder::new()
            .completion_state(CompletionState::Complete)
            .build()
            .apply(&mut lesson, later);

        assert_eq!(lesson.topic, "CLI");
        assert_eq!(lesson.completion_state, CompletionState::Complete);
        assert_eq!(lesson.created_at, created);
        assert_eq!(lesson.updated_at, later);
    }

    #[test]
    fn blank_topic_is_invalid() {
        let update = LessonUpdateBuilder::new().topic("  ").build();
        assert!(update.validate().is_err());
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = LessonUpdateBuilder::new().topic("Rust").build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"topic": "Rust"}));
    }
}
