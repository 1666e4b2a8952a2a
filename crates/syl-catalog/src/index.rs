//! Derived lookup indices over the catalog.
//!
//! Indices map normalized keys to record positions in catalog order. Records
//! are never removed, so positions stay valid until the next rebuild.

use std::collections::{BTreeMap, HashMap};

use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;
use syl_core::responses::TopicCount;

/// Case-insensitive key used by the topic and model indices.
#[must_use]
pub fn normalize_key(value: &str) -> String {
    value.to_lowercase()
}

#[derive(Debug, Default, Clone)]
pub struct CatalogIndex {
    topic: HashMap<String, Vec<usize>>,
    state: HashMap<CompletionState, Vec<usize>>,
    model: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    /// Build all indices from scratch.
    #[must_use]
    pub fn build(records: &[LessonScript]) -> Self {
        let mut index = Self::default();
        for (pos, record) in records.iter().enumerate() {
            index
                .topic
                .entry(normalize_key(&record.topic))
                .or_default()
                .push(pos);
            index
                .state
                .entry(record.completion_state)
                .or_default()
                .push(pos);
            index
                .model
                .entry(normalize_key(&record.origin_model))
                .or_default()
                .push(pos);
        }
        tracing::debug!(
            records = records.len(),
            topics = index.topic.len(),
            models = index.model.len(),
            "catalog index rebuilt"
        );
        index
    }

    /// Positions of records whose topic matches, ignoring case.
    #[must_use]
    pub fn topic(&self, topic: &str) -> &[usize] {
        self.topic
            .get(&normalize_key(topic))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn state(&self, state: CompletionState) -> &[usize] {
        self.state.get(&state).map_or(&[], Vec::as_slice)
    }

    /// Positions of records whose origin model matches, ignoring case.
    #[must_use]
    pub fn model(&self, model: &str) -> &[usize] {
        self.model
            .get(&normalize_key(model))
            .map_or(&[], Vec::as_slice)
    }

    /// Distinct topics with record counts, sorted alphabetically.
    ///
    /// Each topic is shown with the spelling of its first record in catalog
    /// order.
    #[must_use]
    pub fn topics(&self, records: &[LessonScript]) -> Vec<TopicCount> {
        let sorted: BTreeMap<&String, &Vec<usize>> = self.topic.iter().collect();
        sorted
            .into_values()
            .filter_map(|positions| {
                let first = records.get(*positions.first()?)?;
                Some(TopicCount {
                    topic: first.topic.clone(),
                    count: u32::try_from(positions.len()).unwrap_or(u32::MAX),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lesson(id: &str, topic: &str, model: &str, state: CompletionState) -> LessonScript {
        let mut lesson = LessonScript::new(id, format!("Lesson {id}"), topic);
        lesson.origin_model = model.into();
        lesson.completion_state = state;
        lesson
    }

    fn records() -> Vec<LessonScript> {
        vec![
            lesson("1", "CLI Flags", "Gemini", CompletionState::InProgress),
            lesson("2", "cli flags", "gemini", CompletionState::Complete),
            lesson("3", "Bayesian Statistics", "Claude", CompletionState::InProgress),
        ]
    }

    #[rstest]
    #[case("CLI FLAGS", &[0, 1])]
    #[case("cli flags", &[0, 1])]
    #[case("bayesian statistics", &[2])]
    #[case("CLI", &[])]
    #[case("cli flags ", &[])]
    fn topic_match_is_case_insensitive_and_exact(#[case] query: &str, #[case] expected: &[usize]) {
        let index = CatalogIndex::build(&records());
        assert_eq!(index.topic(query), expected);
    }

    #[test]
    fn state_and_model_lookups() {
        let index = CatalogIndex::build(&records());
        assert_eq!(index.state(CompletionState::InProgress), &[0, 2]);
        assert!(index.state(CompletionState::AbandonedButUseful).is_empty());
        assert_eq!(index.model("GEMINI"), &[0, 1]);
    }

    #[test]
    fn topics_are_sorted_and_counted() {
        let records = records();
        let index = CatalogIndex::build(&records);
        assert_eq!(
            index.topics(&records),
            vec![
                TopicCount {
                    topic: "Bayesian Statistics".into(),
                    count: 1
                },
                TopicCount {
                    topic: "CLI Flags".into(),
                    count: 2
                },
            ]
        );
    }
}
