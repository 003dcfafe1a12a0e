//! Backforge Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Backforge backend scaffolder,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           backforge-cli (CLI)           │
//! │   args, prompts, config, terminal UI    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ValidatorChain, GenerationService)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ Filesystem, TemplateCatalog,            │
//! │ CommandRunner, ProgressSink             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   backforge-adapters (Infrastructure)   │
//! │ LocalFilesystem, BuiltinCatalog,        │
//! │ ProcessRunner                           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ ProjectConfig, FileTemplate,            │
//! │ GenerationPlan                          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use backforge_core::prelude::*;
//!
//! let config = ProjectConfig::builder("demo-api", ".")
//!     .variant(ProjectVariant::Python)
//!     .build()?;
//!
//! let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
//! ValidatorChain::for_request(Arc::clone(&fs), config.overwrite())
//!     .run(config.name(), config.target_dir())?;
//!
//! let service = GenerationService::new(catalog, fs, runner);
//! let report = service.generate(&config, &NoProgress)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService, StepOutcome, ValidatorChain,
        ports::{
            CommandRunner, Filesystem, GenerationStep, NoProgress, ProgressSink, TemplateCatalog,
        },
    };
    pub use crate::domain::{
        FileTemplate, GenerationDepth, GenerationPlan, HashAlgorithm, LanguageModel,
        PackageManager, ProjectConfig, ProjectVariant, RenderContext, TemplateGroup,
    };
    pub use crate::error::{ErrorCategory, ForgeError, ForgeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
