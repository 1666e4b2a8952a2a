use syl_catalog::LessonUpdateBuilder;
use syl_core::entities::LessonScript;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::UpdateArgs;
use crate::commands::shared::parse::{parse_state, required_text};
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl update`.
pub fn handle(args: &UpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lesson = run(args, ctx)?;
    output(&lesson, flags.format)
}

pub fn run(args: &UpdateArgs, ctx: &mut AppContext) -> anyhow::Result<LessonScript> {
    validate_update_args(args)?;

    let mut builder = LessonUpdateBuilder::new();
    if let Some(topic) = args.topic.as_deref() {
        builder = builder.topic(required_text(topic, "topic")?);
    }
    if let Some(state) = parse_state(args.state.as_deref())? {
        builder = builder.completion_state(state);
    }

    Ok(ctx.store.update(&args.id, &builder.build())?.clone())
}

fn validate_update_args(args: &UpdateArgs) -> anyhow::Result<()> {
    if args.topic.is_none() && args.state.is_none() {
        anyhow::bail!("At least one of --topic or --state must be provided");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use syl_core::entities::LessonScript;
    use syl_core::enums::CompletionState;

    use super::run;
    use crate::cli::root_commands::UpdateArgs;
    use crate::context::AppContext;

    fn ctx_with_lesson() -> AppContext {
        let mut ctx = AppContext::for_tests();
        ctx.store
            .add(LessonScript::new("1", "Understanding -v flag", "CLI"))
            .expect("add should succeed");
        ctx
    }

    #[test]
    fn rejects_noop_update() {
        let mut ctx = ctx_with_lesson();
        let args = UpdateArgs {
            id: "1".into(),
            topic: None,
            state: None,
        };
        assert!(run(&args, &mut ctx).is_err());
    }

    #[test]
    fn updates_state() {
        let mut ctx = ctx_with_lesson();
        let args = UpdateArgs {
            id: "1".into(),
            topic: None,
            state: Some("abandoned".into()),
        };
        let lesson = run(&args, &mut ctx).expect("update should succeed");
        assert_eq!(lesson.completion_state, CompletionState::AbandonedButUseful);
        assert_eq!(lesson.topic, "CLI");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut ctx = ctx_with_lesson();
        let args = UpdateArgs {
            id: "2".into(),
            topic: Some("Shell".into()),
            state: None,
        };
        let err = run(&args, &mut ctx).expect_err("should fail");
        assert!(err.to_string().contains("not found: 2"));
        assert_eq!(ctx.store.get("1").expect("still there").topic, "CLI");
    }
}
