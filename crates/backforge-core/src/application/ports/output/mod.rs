//! Driven (output) ports - implemented by infrastructure.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::domain::{FileTemplate, ProjectConfig};
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `backforge_adapters::filesystem::LocalFilesystem` (production)
/// - `backforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// The probe methods (`exists`, `is_dir`, `has_entries`, `is_writable`)
/// must not change anything on disk; the validation chain relies on that.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether a directory contains at least one entry.
    fn has_entries(&self, path: &Path) -> ForgeResult<bool>;

    /// Whether the current process may create entries inside `path`.
    fn is_writable(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;
}

/// Port for the built-in template sets.
///
/// Selection must be a pure function of the config: same config, same
/// files in the same order.
pub trait TemplateCatalog: Send + Sync {
    fn collect(&self, config: &ProjectConfig) -> ForgeResult<Vec<FileTemplate>>;
}

/// Port for running external programs with a deadline.
///
/// Implemented by `backforge_adapters::process::ProcessRunner`. A non-zero
/// exit status, a missing binary and an expired timeout all come back as
/// errors; callers decide whether they matter.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String], cwd: &Path, timeout: Duration)
    -> ForgeResult<()>;
}

/// The five fixed pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStep {
    CollectTemplates,
    CreateDirectories,
    WriteFiles,
    InitGit,
    InstallHooks,
}

impl GenerationStep {
    pub const ALL: [Self; 5] = [
        Self::CollectTemplates,
        Self::CreateDirectories,
        Self::WriteFiles,
        Self::InitGit,
        Self::InstallHooks,
    ];

    pub const COUNT: u8 = 5;

    /// Zero-based position in the pipeline.
    pub const fn index(&self) -> u8 {
        match self {
            Self::CollectTemplates => 0,
            Self::CreateDirectories => 1,
            Self::WriteFiles => 2,
            Self::InitGit => 3,
            Self::InstallHooks => 4,
        }
    }

    /// Percentage reported when this step starts.
    pub const fn percent(&self) -> u8 {
        self.index() * 100 / Self::COUNT
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::CollectTemplates => "Collecting templates",
            Self::CreateDirectories => "Creating directories",
            Self::WriteFiles => "Writing files",
            Self::InitGit => "Initializing git repository",
            Self::InstallHooks => "Installing pre-commit hooks",
        }
    }
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Port for progress feedback. Carries no functional meaning.
pub trait ProgressSink {
    /// Called before each step starts.
    fn step(&self, step: GenerationStep, percent: u8);

    /// Called once after the last step.
    fn finish(&self);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn step(&self, _step: GenerationStep, _percent: u8) {}
    fn finish(&self) {}
}
