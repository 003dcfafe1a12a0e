pub mod common;
pub mod generation_plan;
pub mod project_config;
pub mod template;

pub use crate::domain::DomainError;
pub use generation_plan::GenerationPlan;
pub use project_config::{FeatureOptions, ProjectConfig, ProjectConfigBuilder, WriteOptions};
pub use template::{FileTemplate, RenderContext, TemplateContent};
