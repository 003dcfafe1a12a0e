//! Domain value objects: variant and option enums.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one has a canonical string form (`as_str`), a `Display` that uses it,
//! and a `FromStr` that also accepts the common aliases users type.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Teach the template catalog in `backforge-adapters` what to emit for it

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectVariant ───────────────────────────────────────────────────────────

/// The backend ecosystem a project is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVariant {
    /// Python + FastAPI + SQLAlchemy.
    #[default]
    Python,
    /// TypeScript + NestJS + Drizzle, with an LLM agents module.
    TypeScript,
}

impl ProjectVariant {
    pub const ALL: [Self; 2] = [Self::Python, Self::TypeScript];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
        }
    }

    /// Human-facing framework name.
    pub const fn framework(&self) -> &'static str {
        match self {
            Self::Python => "FastAPI",
            Self::TypeScript => "NestJS",
        }
    }

    /// Whether RAG and queue scaffolding exist for this variant.
    pub const fn supports_agent_features(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

impl fmt::Display for ProjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectVariant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" | "fastapi" => Ok(Self::Python),
            "typescript" | "ts" | "nestjs" | "nest" => Ok(Self::TypeScript),
            other => Err(DomainError::InvalidOption {
                option: "project type",
                value: other.to_string(),
            }),
        }
    }
}

// ── HashAlgorithm ────────────────────────────────────────────────────────────

/// Password hashing scheme wired into the generated security module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Argon2,
    Bcrypt,
}

impl HashAlgorithm {
    pub const ALL: [Self; 2] = [Self::Argon2, Self::Bcrypt];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Argon2 => "argon2",
            Self::Bcrypt => "bcrypt",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" | "argon2id" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            other => Err(DomainError::InvalidOption {
                option: "hash algorithm",
                value: other.to_string(),
            }),
        }
    }
}

// ── PackageManager ───────────────────────────────────────────────────────────

/// Node package manager used in the generated Dockerfile, CI and README.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [Self; 3] = [Self::Pnpm, Self::Npm, Self::Yarn];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Command that installs dependencies from scratch.
    pub const fn install_command(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm install",
            Self::Npm => "npm install",
            Self::Yarn => "yarn install",
        }
    }

    /// Lockfile-respecting install used in CI.
    pub const fn ci_install_command(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm install --frozen-lockfile",
            Self::Npm => "npm ci",
            Self::Yarn => "yarn install --frozen-lockfile",
        }
    }

    /// Prefix for running a package.json script.
    pub const fn run_prefix(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm run",
            Self::Npm => "npm run",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pnpm" => Ok(Self::Pnpm),
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            other => Err(DomainError::InvalidOption {
                option: "package manager",
                value: other.to_string(),
            }),
        }
    }
}

// ── LanguageModel ────────────────────────────────────────────────────────────

/// Default model wired into the generated model registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageModel {
    #[default]
    #[serde(rename = "gpt-5.1")]
    Gpt51,
    #[serde(rename = "claude-sonnet-4.5")]
    ClaudeSonnet45,
    #[serde(rename = "claude-opus-4.1")]
    ClaudeOpus41,
    #[serde(rename = "gemini-3")]
    Gemini3,
}

impl LanguageModel {
    pub const ALL: [Self; 4] = [
        Self::Gpt51,
        Self::ClaudeSonnet45,
        Self::ClaudeOpus41,
        Self::Gemini3,
    ];

    /// Registry key, as typed on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gpt51 => "gpt-5.1",
            Self::ClaudeSonnet45 => "claude-sonnet-4.5",
            Self::ClaudeOpus41 => "claude-opus-4.1",
            Self::Gemini3 => "gemini-3",
        }
    }

    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Gpt51 => "openai",
            Self::ClaudeSonnet45 | Self::ClaudeOpus41 => "anthropic",
            Self::Gemini3 => "google",
        }
    }

    /// Provider-side model identifier.
    pub const fn model_id(&self) -> &'static str {
        match self {
            Self::Gemini3 => "gemini-3-ultra",
            other => other.as_str(),
        }
    }

    /// Context window in tokens.
    pub const fn context_window(&self) -> u32 {
        match self {
            Self::Gpt51 => 128_000,
            Self::ClaudeSonnet45 | Self::ClaudeOpus41 => 200_000,
            Self::Gemini3 => 1_000_000,
        }
    }
}

impl fmt::Display for LanguageModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageModel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or(DomainError::InvalidOption {
                option: "default model",
                value: lower,
            })
    }
}

// ── GenerationDepth ──────────────────────────────────────────────────────────

/// How much of the example application is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationDepth {
    /// Entry points, configuration and package markers only.
    Scaffold,
    /// Scaffold plus the example domain modules.
    #[default]
    Full,
}

impl GenerationDepth {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::Full => "full",
        }
    }

    pub const fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }
}

impl fmt::Display for GenerationDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationDepth {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scaffold" | "skeleton" | "minimal" => Ok(Self::Scaffold),
            "full" => Ok(Self::Full),
            other => Err(DomainError::InvalidOption {
                option: "generation depth",
                value: other.to_string(),
            }),
        }
    }
}

// ── TemplateGroup ────────────────────────────────────────────────────────────

/// Selection group a template belongs to.
///
/// Every optional flag on `ProjectConfig` switches exactly one group on or
/// off, which keeps template selection inspectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateGroup {
    Core,
    Config,
    Docker,
    CiCd,
    Tests,
    Rag,
    Queue,
}

impl TemplateGroup {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Config => "config",
            Self::Docker => "docker",
            Self::CiCd => "cicd",
            Self::Tests => "tests",
            Self::Rag => "rag",
            Self::Queue => "queue",
        }
    }
}

impl fmt::Display for TemplateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
