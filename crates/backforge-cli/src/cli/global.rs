//! Flags shared by generation and by the `config` / `completions`
//! subcommands. Every flag is `global`, so `backforge config list -q` and
//! `backforge -q config list` mean the same thing.

use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Log more about the generation pipeline (repeatable)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        long_help = "Log more about the generation pipeline. Logs go to stderr.
    (none)  warnings and errors
    -v      start and end of a generation run
    -vv     each pipeline step, skipped files, git and pre-commit failures
    -vvv    every directory created and file written

RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    /// Print errors only; the JSON report is still written
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR", hide_env = true)]
    pub no_color: bool,

    /// Read defaults from FILE instead of the per-user config file
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are rendered on stdout
    #[arg(long = "output-format", global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Error output shows the full cause chain.
    pub fn shows_causes(&self) -> bool {
        self.verbose > 0
    }
}

/// Rendering of summaries, plans and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Colours, summary table and progress bar
    Human,
    /// Same text, no colours and no progress bar
    Plain,
    /// One JSON document: the plan on `--dry-run`, the run report otherwise
    Json,
}
