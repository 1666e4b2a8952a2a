use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `syl` binary.
#[derive(Debug, Parser)]
#[command(name = "syl", version, about = "Syllabus - catalog of AI-generated lesson scripts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .syllabus)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::root_commands::{FindArgs, ImportArgs};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["syl", "--format", "json", "--limit", "10", "--verbose", "topics"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Topics));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["syl", "topics", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["syl", "list"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["syl", "--format", "xml", "topics"]).is_err());
    }

    #[test]
    fn find_accepts_topic_flag() {
        let cli = Cli::try_parse_from(["syl", "find", "--topic", "CLI Flags"]).expect("cli should parse");
        let Commands::Find(FindArgs { topic, state, .. }) = cli.command else {
            panic!("expected find");
        };
        assert_eq!(topic.as_deref(), Some("CLI Flags"));
        assert!(state.is_none());
    }

    #[test]
    fn add_requires_title_and_topic() {
        assert!(Cli::try_parse_from(["syl", "add", "--title", "t"]).is_err());
        assert!(Cli::try_parse_from(["syl", "add", "--title", "t", "--topic", "CLI"]).is_ok());
    }

    #[test]
    fn import_requires_a_path() {
        assert!(Cli::try_parse_from(["syl", "import"]).is_err());
        let cli = Cli::try_parse_from(["syl", "import", "lessons", "extra.py", "--topic", "Data"])
            .expect("cli should parse");
        let Commands::Import(ImportArgs { paths, topic, .. }) = cli.command else {
            panic!("expected import");
        };
        assert_eq!(paths.len(), 2);
        assert_eq!(topic.as_deref(), Some("Data"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["syl", "--project", "/tmp/demo", "topics"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
    }
}
