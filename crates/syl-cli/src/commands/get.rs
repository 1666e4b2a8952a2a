use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl get`.
pub fn handle(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lesson = ctx.store.get(id)?;
    output(lesson, flags.format)
}
