use syl_catalog::CatalogStore;
use syl_catalog::index::normalize_key;
use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;

/// Conjunction of optional query criteria.
#[derive(Clone, Copy, Debug, Default)]
pub struct LessonFilter<'a> {
    pub topic: Option<&'a str>,
    pub state: Option<CompletionState>,
    pub model: Option<&'a str>,
}

impl<'a> LessonFilter<'a> {
    /// Filter from raw CLI values, trimmed the way `add` trims stored fields.
    #[must_use]
    pub fn from_args(
        topic: Option<&'a str>,
        state: Option<CompletionState>,
        model: Option<&'a str>,
    ) -> Self {
        Self {
            topic: topic.map(str::trim),
            state,
            model: model.map(str::trim),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.topic.is_none() && self.state.is_none() && self.model.is_none()
    }

    fn matches(&self, lesson: &LessonScript) -> bool {
        self.topic
            .is_none_or(|topic| normalize_key(&lesson.topic) == normalize_key(topic))
            && self.state.is_none_or(|state| lesson.completion_state == state)
            && self
                .model
                .is_none_or(|model| normalize_key(&lesson.origin_model) == normalize_key(model))
    }
}

/// Records matching `filter`, in catalog order.
///
/// Seeds from one index lookup (topic, then model, then state) and checks
/// the remaining criteria per record.
#[must_use]
pub fn select<'s>(store: &'s CatalogStore, filter: &LessonFilter<'_>) -> Vec<&'s LessonScript> {
    let seed = if let Some(topic) = filter.topic {
        store.by_topic(topic)
    } else if let Some(model) = filter.model {
        store.by_model(model)
    } else if let Some(state) = filter.state {
        store.by_state(state)
    } else {
        store.list().collect()
    };

    seed.into_iter().filter(|lesson| filter.matches(lesson)).collect()
}
