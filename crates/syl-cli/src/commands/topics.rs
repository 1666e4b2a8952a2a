use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `syl topics`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.store.topics(), flags.format)
}
