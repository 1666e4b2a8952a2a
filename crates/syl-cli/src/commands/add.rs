use syl_core::entities::LessonScript;
use syl_core::ids::{PREFIX_LESSON, generate_id};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AddArgs;
use crate::commands::shared::parse::{parse_state, required_text};
use crate::context::AppContext;
use crate::output::output;

const ID_ATTEMPTS: usize = 8;

/// Handle `syl add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lesson = run(args, ctx)?;
    output(&lesson, flags.format)
}

pub fn run(args: &AddArgs, ctx: &mut AppContext) -> anyhow::Result<LessonScript> {
    let id = match args.id.as_deref() {
        Some(id) => required_text(id, "id")?,
        None => fresh_id(ctx)?,
    };

    let mut lesson = LessonScript::new(
        id,
        required_text(&args.title, "title")?,
        required_text(&args.topic, "topic")?,
    );
    lesson.origin_model = args
        .model
        .as_deref()
        .map_or_else(|| ctx.config.general.default_model.clone(), |m| m.trim().to_string());
    if let Some(state) = parse_state(args.state.as_deref())? {
        lesson.completion_state = state;
    }
    lesson.summary = args
        .summary
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    Ok(ctx.store.add(lesson)?.clone())
}

fn fresh_id(ctx: &AppContext) -> anyhow::Result<String> {
    for _ in 0..ID_ATTEMPTS {
        let id = generate_id(PREFIX_LESSON)
            .map_err(|error| anyhow::anyhow!("failed to generate id: {error}"))?;
        if !ctx.store.contains(&id) {
            return Ok(id);
        }
    }
    anyhow::bail!("could not generate an unused id after {ID_ATTEMPTS} attempts")
}
