//! FastAPI project file set.

mod app;
mod config;
mod test_suite;

use backforge_core::domain::{FileTemplate, ProjectConfig, RenderContext};

pub(super) fn templates(project: &ProjectConfig, ctx: &RenderContext) -> Vec<FileTemplate> {
    let features = project.features();

    let mut templates = app::templates(features, ctx);
    templates.extend(config::templates(features, ctx));
    if features.docker {
        templates.extend(config::docker(ctx));
    }
    if features.cicd {
        templates.push(config::ci_workflow());
    }
    if features.tests {
        templates.extend(test_suite::templates(features.depth));
    }
    templates
}
