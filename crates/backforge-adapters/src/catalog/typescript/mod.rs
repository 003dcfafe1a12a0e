//! NestJS AI-agents project file set.
//!
//! Order: core, agents, database, project config, then the optional groups.
//! `package.json` only depends on `queue`, never on `tests`.

mod agents;
mod bootstrap;
mod config;
mod database;
mod test_suite;

use backforge_core::domain::{FileTemplate, ProjectConfig, RenderContext, TemplateGroup};

pub(super) fn templates(project: &ProjectConfig, ctx: &RenderContext) -> Vec<FileTemplate> {
    let features = project.features();
    let manager = features.package_manager;

    let mut templates = bootstrap::templates(ctx);
    templates.extend(agents::templates(features.default_model, features.depth));
    templates.extend(database::templates(features.rag));
    templates.extend(config::templates(features, ctx));

    if features.docker {
        templates.extend(config::docker(manager, ctx));
    }
    if features.cicd {
        templates.push(config::ci_workflow(manager));
    }
    if features.rag {
        templates.push(FileTemplate::keep("src/agents/rag", TemplateGroup::Rag));
    }
    if features.queue {
        templates.push(FileTemplate::keep("src/queue", TemplateGroup::Queue));
    }
    if features.tests {
        templates.extend(test_suite::templates(features.depth));
    }

    templates
}
