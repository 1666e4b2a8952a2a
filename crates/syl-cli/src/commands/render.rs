use syl_catalog::{RenderOptions, render_markdown, write_atomic};
use syl_core::responses::RenderResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::commands::shared::filter::{LessonFilter, select};
use crate::commands::shared::parse::parse_state;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl render`.
///
/// Prints Markdown to stdout, or writes it atomically to `--output` and
/// reports the written path in the requested format.
pub fn handle(args: &RenderArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (markdown, entries) = run(args, ctx)?;

    let Some(path) = &args.output else {
        print!("{markdown}");
        return Ok(());
    };

    write_atomic(path, markdown.as_bytes())?;
    tracing::debug!(path = %path.display(), entries, "listing written");
    output(
        &RenderResponse {
            path: path.display().to_string(),
            entries,
        },
        flags.format,
    )
}

pub fn run(args: &RenderArgs, ctx: &AppContext) -> anyhow::Result<(String, u32)> {
    let filter = LessonFilter::from_args(
        args.topic.as_deref(),
        parse_state(args.state.as_deref())?,
        args.model.as_deref(),
    );
    let lessons = select(&ctx.store, &filter);

    let options = RenderOptions {
        title: ctx.config.render.title.clone(),
        show_summary: ctx.config.render.show_summary,
        show_sections: args.sections || ctx.config.render.show_sections,
    };
    let entries = u32::try_from(lessons.len())?;
    Ok((render_markdown(lessons, &options), entries))
}
