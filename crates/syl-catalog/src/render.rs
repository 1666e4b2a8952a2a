//! Markdown listing of lesson scripts, grouped by topic.

use std::collections::BTreeMap;
use std::fmt::Write;

use syl_core::entities::LessonScript;

use crate::index::normalize_key;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub show_summary: bool,
    pub show_sections: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Lesson Catalog".to_string(),
            show_summary: true,
            show_sections: false,
        }
    }
}

/// Render `lessons` as Markdown.
///
/// One `##` section per topic, topics compared and sorted case-insensitively;
/// the heading keeps the spelling of the first lesson seen for that topic.
/// Entries are sorted by title, then id, and annotated with their
/// completion state.
#[must_use]
pub fn render_markdown<'a, I>(lessons: I, options: &RenderOptions) -> String
where
    I: IntoIterator<Item = &'a LessonScript>,
{
    let mut groups: BTreeMap<String, (&str, Vec<&LessonScript>)> = BTreeMap::new();
    for lesson in lessons {
        groups
            .entry(normalize_key(&lesson.topic))
            .or_insert_with(|| (lesson.topic.as_str(), Vec::new()))
            .1
            .push(lesson);
    }

    let mut out = format!("# {}\n", options.title);
    if groups.is_empty() {
        out.push_str("\n_No lesson scripts._\n");
        return out;
    }

    for (heading, mut entries) in groups.into_values() {
        entries.sort_by(|a, b| {
            normalize_key(&a.title)
                .cmp(&normalize_key(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });

        let _ = write!(out, "\n## {heading}\n\n");
        for lesson in entries {
            render_entry(&mut out, lesson, options);
        }
    }
    out
}

fn render_entry(out: &mut String, lesson: &LessonScript, options: &RenderOptions) {
    let _ = write!(
        out,
        "- **{}** _({})_",
        lesson.title,
        lesson.completion_state.label()
    );
    if !lesson.origin_model.is_empty() {
        let _ = write!(out, " · {}", lesson.origin_model);
    }
    let _ = writeln!(
        out,
        " · {} · `{}`",
        lesson.created_at.format("%Y-%m-%d"),
        lesson.id
    );

    if options.show_summary
        && let Some(summary) = lesson.summary.as_deref()
    {
        let _ = writeln!(out, "  {summary}");
    }
    if options.show_sections {
        for (n, section) in lesson.sections.iter().enumerate() {
            let _ = writeln!(out, "  {}. {section}", n + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use syl_core::enums::CompletionState;

    use super::*;

    fn lesson(id: &str, title: &str, topic: &str, state: CompletionState) -> LessonScript {
        let mut lesson = LessonScript::new(id, title, topic);
        lesson.origin_model = "X".into();
        lesson.completion_state = state;
        lesson.created_at = Utc.with_ymd_and_hms(2025, 8, 24, 12, 0, 0).unwrap();
        lesson
    }

    #[test]
    fn empty_listing_has_placeholder() {
        let out = render_markdown(std::iter::empty(), &RenderOptions::default());
        assert_eq!(out, "# Lesson Catalog\n\n_No lesson scripts._\n");
    }

    #[test]
    fn groups_by_topic_alphabetically() {
        let lessons = vec![
            lesson("2", "Verbose output", "shell", CompletionState::Complete),
            lesson("1", "Understanding -v flag", "CLI", CompletionState::InProgress),
            lesson("3", "Aliases", "Shell", CompletionState::AbandonedButUseful),
        ];

        let out = render_markdown(&lessons, &RenderOptions::default());
        let expected = "\
# Lesson Catalog

## CLI

- **Understanding -v flag** _(in progress)_ · X · 2025-08-24 · `1`

## shell

- **Aliases** _(abandoned but useful)_ · X · 2025-08-24 · `3`
- **Verbose output** _(complete)_ · X · 2025-08-24 · `2`
";
        assert_eq!(out, expected);
    }

    #[test]
    fn summary_and_sections_follow_options() {
        let mut entry = lesson("qml", "QML Lesson", "Quantum", CompletionState::Complete);
        entry.origin_model.clear();
        entry.summary = Some("Build a quantum classifier.".into());
        entry.sections = vec!["Introduction".into(), "Setup".into()];

        let options = RenderOptions {
            title: "Lessons".into(),
            show_summary: true,
            show_sections: true,
        };
        let out = render_markdown([&entry], &options);
        assert_eq!(
            out,
            "# Lessons\n\n## Quantum\n\n- **QML Lesson** _(complete)_ · 2025-08-24 · `qml`\n  Build a quantum classifier.\n  1. Introduction\n  2. Setup\n"
        );

        let hidden = render_markdown([&entry], &RenderOptions::default());
        assert!(hidden.contains("Build a quantum classifier."));
        assert!(!hidden.contains("1. Introduction"));
    }
}
