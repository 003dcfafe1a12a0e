//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it, it only receives the
//! resolved `ProjectConfig`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Environment variables: `BACKFORGE__DEFAULTS__PACKAGE_MANAGER=npm`
//! 3. Config file: `--config FILE`, or `config.toml` in the platform config dir
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use backforge_core::domain::{
    FeatureOptions, GenerationDepth, HashAlgorithm, LanguageModel, PackageManager,
    ProjectVariant, WriteOptions,
};

const ENV_PREFIX: &str = "BACKFORGE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a generation option is not given on the command line.
    pub defaults: Defaults,
    /// Terminal output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub variant: ProjectVariant,
    pub hash_algorithm: HashAlgorithm,
    pub package_manager: PackageManager,
    pub default_model: LanguageModel,
    pub depth: GenerationDepth,
    pub docker: bool,
    pub tests: bool,
    pub cicd: bool,
    pub git_init: bool,
    pub install_hooks: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        let features = FeatureOptions::default();
        let write = WriteOptions::default();
        Self {
            variant: ProjectVariant::default(),
            hash_algorithm: features.hash_algorithm,
            package_manager: features.package_manager,
            default_model: features.default_model,
            depth: features.depth,
            docker: features.docker,
            tests: features.tests,
            cicd: features.cicd,
            git_init: write.git_init,
            install_hooks: write.install_hooks,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::config_path(), false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.clone()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.backforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "backforge", "backforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".backforge.toml"))
    }
}
