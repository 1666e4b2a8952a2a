use std::path::Path;

use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("syl error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();

    let project_root = match &cli.command {
        cli::Commands::Init(args) => {
            start(&flags, None)?;
            return commands::init::handle(args, &flags);
        }
        cli::Commands::Schema => {
            start(&flags, None)?;
            return commands::schema::handle();
        }
        _ => context::resolve_project_root(flags.project.as_deref())?,
    };
    start(&flags, Some(&project_root))?;

    let config = syl_config::SylConfig::load(Some(&project_root))
        .context("failed to load syllabus configuration")?;

    let mut ctx = context::AppContext::init(project_root, config)
        .context("failed to initialize syllabus application context")?;

    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

/// Load `.env` first so `SYLLABUS_LOG` from it reaches the subscriber.
fn start(flags: &cli::GlobalFlags, project_root: Option<&Path>) -> anyhow::Result<()> {
    syl_config::load_dotenv(project_root);
    init_tracing(flags)?;
    ui::init(flags);
    Ok(())
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let level = if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SYLLABUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
