//! End-to-end catalog scenarios over an in-memory store.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use syl_catalog::{CatalogStore, RenderOptions, render_markdown};
use syl_core::entities::LessonScript;
use syl_core::enums::CompletionState;

#[fixture]
fn flag_lesson() -> LessonScript {
    let mut lesson = LessonScript::new("1", "Understanding -v flag", "CLI");
    lesson.origin_model = "X".into();
    lesson.completion_state = "InProgress".parse().unwrap();
    lesson
}

#[rstest]
fn single_record_scenario(flag_lesson: LessonScript) {
    let mut store = CatalogStore::in_memory();
    store.add(flag_lesson.clone()).unwrap();

    let all: Vec<&LessonScript> = store.list().collect();
    assert_eq!(all, vec![&flag_lesson]);
    assert_eq!(store.by_state(CompletionState::InProgress), vec![&flag_lesson]);
    assert!(store.by_state(CompletionState::Complete).is_empty());
}

#[rstest]
#[case("CLI FLAGS")]
#[case("cli flags")]
#[case("Cli Flags")]
fn topic_lookup_ignores_case(#[case] query: &str) {
    let mut store = CatalogStore::in_memory();
    store.add(LessonScript::new("a", "One", "CLI Flags")).unwrap();
    store.add(LessonScript::new("b", "Two", "cli flags")).unwrap();
    store.add(LessonScript::new("c", "Three", "Shell")).unwrap();

    let ids: Vec<&str> = store.by_topic(query).iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[rstest]
fn rendered_query_results_annotate_state(flag_lesson: LessonScript) {
    let mut store = CatalogStore::in_memory();
    store.add(flag_lesson).unwrap();
    store.add(LessonScript::new("2", "Exit codes", "cli")).unwrap();

    let out = render_markdown(store.by_topic("CLI"), &RenderOptions::default());
    assert_eq!(out.matches("## ").count(), 1);
    assert!(out.contains("- **Exit codes** _(in progress)_"));
    assert!(out.contains("- **Understanding -v flag** _(in progress)_ · X ·"));
    let exit = out.find("Exit codes").unwrap();
    let flag = out.find("Understanding").unwrap();
    assert!(exit < flag);
}
