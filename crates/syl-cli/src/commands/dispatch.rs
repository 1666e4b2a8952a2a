use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx, flags),
        Commands::Get { id } => commands::get::handle(&id, ctx, flags),
        Commands::Update(args) => commands::update::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Find(args) => commands::find::handle(&args, ctx, flags),
        Commands::Topics => commands::topics::handle(ctx, flags),
        Commands::Render(args) => commands::render::handle(&args, ctx, flags),
        Commands::Import(args) => commands::import::handle(&args, ctx, flags),
        Commands::Init(_) | Commands::Schema => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
