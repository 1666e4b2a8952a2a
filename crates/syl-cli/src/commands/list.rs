use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::filter::{LessonFilter, select};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_state;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = LessonFilter::from_args(
        None,
        parse_state(args.state.as_deref())?,
        args.model.as_deref(),
    );

    let mut lessons = select(&ctx.store, &filter);
    lessons.truncate(effective_limit(flags.limit, ctx.config.general.default_limit));
    output(&lessons, flags.format)
}
