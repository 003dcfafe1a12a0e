//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here; the value enums
//! convert into their `backforge_core::domain` counterparts via `From`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use backforge_core::domain::{
    GenerationDepth, HashAlgorithm, LanguageModel, PackageManager, ProjectVariant,
};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the invocation generates a project.
#[derive(Debug, Parser)]
#[command(
    name     = "backforge",
    bin_name = "backforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Backend project scaffolding for FastAPI and NestJS",
    long_about = "Backforge generates ready-to-run backend projects: a layered \
                  FastAPI service with SQLAlchemy and Alembic, or a NestJS service \
                  with Drizzle and a multi-provider LLM agents module.",
    after_help = "EXAMPLES:\n\
        \x20 backforge demo-api\n\
        \x20 backforge demo-api --type python --hash-algo bcrypt --no-docker\n\
        \x20 backforge agents-api --type ts --package-manager npm --model claude-sonnet-4.5 --rag\n\
        \x20 backforge demo-api --dry-run --output-format json\n\
        \x20 backforge completions bash > ~/.local/share/bash-completion/completions/backforge",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Generation options, used when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Auxiliary subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 backforge completions bash > ~/.local/share/bash-completion/completions/backforge\n\
            \x20 backforge completions zsh  > ~/.zfunc/_backforge\n\
            \x20 backforge completions fish > ~/.config/fish/completions/backforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or initialise the Backforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 backforge config get defaults.variant\n\
            \x20 backforge config list\n\
            \x20 backforge config init --force"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Options for generating a project.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Project name; also the directory created under `--output-dir`.
    #[arg(
        value_name = "NAME",
        help = "Project name (prompted when omitted)"
    )]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub variant: Option<VariantArg>,

    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory the project is created in"
    )]
    pub output_dir: PathBuf,

    /// Write into an existing, non-empty directory, replacing files.
    #[arg(long = "overwrite", help = "Replace files in an existing project directory")]
    pub overwrite: bool,

    #[arg(long = "no-docker", help = "Skip Dockerfile and docker-compose.yml")]
    pub no_docker: bool,

    #[arg(long = "no-tests", help = "Skip the test suite")]
    pub no_tests: bool,

    #[arg(long = "no-cicd", help = "Skip the GitHub Actions workflow")]
    pub no_cicd: bool,

    #[arg(
        long = "hash-algo",
        value_name = "ALGO",
        value_enum,
        help = "Password hashing algorithm (python)"
    )]
    pub hash_algo: Option<HashArg>,

    #[arg(
        long = "package-manager",
        value_name = "PM",
        value_enum,
        help = "Node package manager (typescript)"
    )]
    pub package_manager: Option<ManagerArg>,

    #[arg(
        long = "model",
        value_name = "MODEL",
        value_enum,
        help = "Default LLM in the model registry (typescript)"
    )]
    pub model: Option<ModelArg>,

    #[arg(long = "rag", help = "Add the RAG module and pgvector schema (typescript)")]
    pub rag: bool,

    #[arg(long = "queue", help = "Add the BullMQ queue module (typescript)")]
    pub queue: bool,

    #[arg(
        long = "depth",
        value_name = "DEPTH",
        value_enum,
        help = "Generate the example domain (full) or only the skeleton (scaffold)"
    )]
    pub depth: Option<DepthArg>,

    #[arg(long = "no-git", help = "Do not run `git init`")]
    pub no_git: bool,

    #[arg(long = "no-hooks", help = "Do not run `pre-commit install`")]
    pub no_hooks: bool,

    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip the confirmation prompt"
    )]
    pub yes: bool,

    #[arg(long = "dry-run", help = "Print the plan without writing anything")]
    pub dry_run: bool,

    /// Never prompt. Options not given on the command line fall back to the
    /// configured defaults, and a missing NAME is an error.
    #[arg(long = "non-interactive", help = "Never prompt for input")]
    pub non_interactive: bool,
}

// ── Value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// FastAPI + SQLAlchemy + Alembic.
    #[value(alias = "py", alias = "fastapi")]
    Python,
    /// NestJS + Drizzle + LLM agents.
    #[value(name = "typescript", alias = "ts", alias = "nestjs")]
    TypeScript,
}

impl From<VariantArg> for ProjectVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Python => Self::Python,
            VariantArg::TypeScript => Self::TypeScript,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashArg {
    Argon2,
    Bcrypt,
}

impl From<HashArg> for HashAlgorithm {
    fn from(arg: HashArg) -> Self {
        match arg {
            HashArg::Argon2 => Self::Argon2,
            HashArg::Bcrypt => Self::Bcrypt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ManagerArg {
    Pnpm,
    Npm,
    Yarn,
}

impl From<ManagerArg> for PackageManager {
    fn from(arg: ManagerArg) -> Self {
        match arg {
            ManagerArg::Pnpm => Self::Pnpm,
            ManagerArg::Npm => Self::Npm,
            ManagerArg::Yarn => Self::Yarn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    #[value(name = "gpt-5.1")]
    Gpt51,
    #[value(name = "claude-sonnet-4.5")]
    ClaudeSonnet45,
    #[value(name = "claude-opus-4.1")]
    ClaudeOpus41,
    #[value(name = "gemini-3")]
    Gemini3,
}

impl From<ModelArg> for LanguageModel {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Gpt51 => Self::Gpt51,
            ModelArg::ClaudeSonnet45 => Self::ClaudeSonnet45,
            ModelArg::ClaudeOpus41 => Self::ClaudeOpus41,
            ModelArg::Gemini3 => Self::Gemini3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DepthArg {
    Full,
    #[value(alias = "minimal")]
    Scaffold,
}

impl From<DepthArg> for GenerationDepth {
    fn from(arg: DepthArg) -> Self {
        match arg {
            DepthArg::Full => Self::Full,
            DepthArg::Scaffold => Self::Scaffold,
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `backforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, addressed as `section.key`.
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. defaults.package_manager")]
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the path of the configuration file in use.
    Path,

    /// Write the built-in defaults to the configuration file.
    Init {
        #[arg(short = 'f', long = "force", help = "Overwrite an existing file")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
