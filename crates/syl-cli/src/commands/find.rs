use syl_core::entities::LessonScript;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::commands::shared::filter::{LessonFilter, select};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_state;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl find`.
pub fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut lessons = run(args, ctx)?;
    lessons.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));
    output(&lessons, flags.format)
}

pub fn run<'c>(args: &FindArgs, ctx: &'c AppContext) -> anyhow::Result<Vec<&'c LessonScript>> {
    let filter = LessonFilter::from_args(
        args.topic.as_deref(),
        parse_state(args.state.as_deref())?,
        args.model.as_deref(),
    );
    if filter.is_empty() {
        anyhow::bail!("At least one of --topic, --state, or --model must be provided");
    }
    Ok(select(&ctx.store, &filter))
}
