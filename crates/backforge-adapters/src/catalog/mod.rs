//! Built-in template catalog.
//!
//! One submodule per variant. Each returns its files in a fixed order, so
//! the same `ProjectConfig` always yields the same plan.
//!
//! ```text
//! BuiltinCatalog::collect(config)
//!   ├── python::templates      app/, config files, docker, ci, tests/
//!   └── typescript::templates  src/, agents, database, config, docker, ci, test/
//! ```

mod python;
mod typescript;
pub mod versions;

use backforge_core::{
    application::ports::TemplateCatalog,
    domain::{FileTemplate, ProjectConfig, ProjectVariant, RenderContext},
    error::ForgeResult,
};
use tracing::{debug, instrument};

/// Catalog of the file sets compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateCatalog for BuiltinCatalog {
    #[instrument(skip_all, fields(project = %config.name(), variant = %config.variant()))]
    fn collect(&self, config: &ProjectConfig) -> ForgeResult<Vec<FileTemplate>> {
        let ctx = RenderContext::new(config.name());

        let templates = match config.variant() {
            ProjectVariant::Python => python::templates(config, &ctx),
            ProjectVariant::TypeScript => typescript::templates(config, &ctx),
        };

        debug!(count = templates.len(), "templates collected");
        Ok(templates)
    }
}
