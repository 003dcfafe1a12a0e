//! The `ProjectConfig` aggregate and its builder.
//!
//! A `ProjectConfig` is the immutable record of every choice the user made
//! for one run. It is assembled once from parsed arguments, config-file
//! defaults and interactive answers, and never changes after generation
//! starts.
//!
//! # Domain purity
//!
//! This module must not touch the filesystem. Whether the name is acceptable
//! and the destination usable is decided by the validation chain in the
//! application layer, through the `Filesystem` port.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{
        GenerationDepth, HashAlgorithm, LanguageModel, PackageManager, ProjectVariant,
    },
};

/// Feature switches and variant-specific choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureOptions {
    pub docker: bool,
    pub tests: bool,
    pub cicd: bool,
    pub hash_algorithm: HashAlgorithm,
    pub package_manager: PackageManager,
    pub default_model: LanguageModel,
    pub rag: bool,
    pub queue: bool,
    pub depth: GenerationDepth,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            docker: true,
            tests: true,
            cicd: true,
            hash_algorithm: HashAlgorithm::default(),
            package_manager: PackageManager::default(),
            default_model: LanguageModel::default(),
            rag: false,
            queue: false,
            depth: GenerationDepth::default(),
        }
    }
}

/// What the pipeline does around the file writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Replace files that already exist.
    pub overwrite: bool,
    /// Run `git init` after writing.
    pub git_init: bool,
    /// Run `pre-commit install` when a hook config was generated.
    pub install_hooks: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            overwrite: false,
            git_init: true,
            install_hooks: true,
        }
    }
}

/// Immutable description of the project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: String,
    target_dir: PathBuf,
    variant: ProjectVariant,
    features: FeatureOptions,
    write: WriteOptions,
}

impl ProjectConfig {
    /// Start building a config for `name` placed under `output_dir`.
    ///
    /// The project root is `output_dir/name`.
    pub fn builder(name: impl Into<String>, output_dir: impl Into<PathBuf>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(name.into(), output_dir.into())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root directory.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub const fn variant(&self) -> ProjectVariant {
        self.variant
    }

    pub const fn features(&self) -> &FeatureOptions {
        &self.features
    }

    pub const fn write_options(&self) -> &WriteOptions {
        &self.write
    }

    pub const fn overwrite(&self) -> bool {
        self.write.overwrite
    }

    /// Cross-field consistency. Called by the builder; the name itself is
    /// checked by the validation chain.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.variant.supports_agent_features() {
            let variant = self.variant.to_string();
            if self.features.rag {
                return Err(DomainError::IncompatibleOption {
                    option: "rag",
                    variant,
                });
            }
            if self.features.queue {
                return Err(DomainError::IncompatibleOption {
                    option: "queue",
                    variant,
                });
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {}, {})",
            self.name,
            self.variant,
            self.variant.framework(),
            self.features.depth
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Every option starts at its default; only the name and output directory
/// are required up front.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    name: String,
    output_dir: PathBuf,
    variant: ProjectVariant,
    features: FeatureOptions,
    write: WriteOptions,
}

impl ProjectConfigBuilder {
    fn new(name: String, output_dir: PathBuf) -> Self {
        Self {
            name,
            output_dir,
            variant: ProjectVariant::default(),
            features: FeatureOptions::default(),
            write: WriteOptions::default(),
        }
    }

    pub fn variant(mut self, variant: ProjectVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn docker(mut self, enabled: bool) -> Self {
        self.features.docker = enabled;
        self
    }

    pub fn tests(mut self, enabled: bool) -> Self {
        self.features.tests = enabled;
        self
    }

    pub fn cicd(mut self, enabled: bool) -> Self {
        self.features.cicd = enabled;
        self
    }

    pub fn hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.features.hash_algorithm = algorithm;
        self
    }

    pub fn package_manager(mut self, manager: PackageManager) -> Self {
        self.features.package_manager = manager;
        self
    }

    pub fn default_model(mut self, model: LanguageModel) -> Self {
        self.features.default_model = model;
        self
    }

    pub fn rag(mut self, enabled: bool) -> Self {
        self.features.rag = enabled;
        self
    }

    pub fn queue(mut self, enabled: bool) -> Self {
        self.features.queue = enabled;
        self
    }

    pub fn depth(mut self, depth: GenerationDepth) -> Self {
        self.features.depth = depth;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.write.overwrite = overwrite;
        self
    }

    pub fn git_init(mut self, enabled: bool) -> Self {
        self.write.git_init = enabled;
        self
    }

    pub fn install_hooks(mut self, enabled: bool) -> Self {
        self.write.install_hooks = enabled;
        self
    }

    /// Finish the config.
    ///
    /// # Errors
    /// - `IncompatibleOption` when RAG or queue is requested for Python
    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let target_dir = self.output_dir.join(&self.name);
        let config = ProjectConfig {
            name: self.name,
            target_dir,
            variant: self.variant,
            features: self.features,
            write: self.write,
        };
        config.validate()?;
        Ok(config)
    }
}
