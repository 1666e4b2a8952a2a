use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a .syllabus directory with an empty catalog.
    Init(InitArgs),
    /// Add a lesson script to the catalog.
    Add(AddArgs),
    /// Get a lesson script by ID.
    Get { id: String },
    /// Change a lesson script's topic or completion state.
    Update(UpdateArgs),
    /// List lesson scripts in catalog order.
    List(ListArgs),
    /// Find lesson scripts by topic, state, or model.
    Find(FindArgs),
    /// List topics with lesson counts.
    Topics,
    /// Render a Markdown listing grouped by topic.
    Render(RenderArgs),
    /// Import lesson scripts from their header docstrings.
    Import(ImportArgs),
    /// Print the JSON Schema of a catalog record.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config.toml with defaults.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub topic: String,
    /// Explicit ID (generated when omitted).
    #[arg(long)]
    pub id: Option<String>,
    /// Model or assistant that produced the script.
    #[arg(long)]
    pub model: Option<String>,
    /// complete, abandoned_but_useful, or in_progress.
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UpdateArgs {
    pub id: String,
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// Topic to match, ignoring case.
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// Origin model to match, ignoring case.
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    /// Include each script's lesson outline.
    #[arg(long)]
    pub sections: bool,
    /// Write the listing to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Script files or directories to scan for .py lesson scripts.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Topic for every imported script.
    #[arg(long)]
    pub topic: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// Origin model, overriding the header's Author line.
    #[arg(long)]
    pub model: Option<String>,
}
