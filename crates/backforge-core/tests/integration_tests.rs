//! Integration tests for backforge-core's public API.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use backforge_core::{
    domain::{DomainError, DomainValidator, RelativePath},
    prelude::*,
};

fn python_plan(config: &ProjectConfig) -> GenerationPlan {
    let mut templates = vec![
        FileTemplate::new("app/main.py", TemplateGroup::Core, "app = FastAPI()"),
        FileTemplate::new("README.md", TemplateGroup::Config, "# demo"),
    ];
    if config.features().docker {
        templates.push(FileTemplate::new("Dockerfile", TemplateGroup::Docker, "FROM python"));
    }
    GenerationPlan::new(config.target_dir(), templates)
}

#[test]
fn config_from_parsed_strings() {
    let config = ProjectConfig::builder("demo-api", "/work")
        .variant(ProjectVariant::from_str("ts").unwrap())
        .package_manager(PackageManager::from_str("yarn").unwrap())
        .default_model(LanguageModel::from_str("gemini-3").unwrap())
        .depth(GenerationDepth::from_str("scaffold").unwrap())
        .rag(true)
        .build()
        .unwrap();

    assert_eq!(config.target_dir(), Path::new("/work/demo-api"));
    assert_eq!(config.variant(), ProjectVariant::TypeScript);
    assert_eq!(config.features().default_model.provider(), "google");
    assert!(!config.features().depth.is_full());
}

#[test]
fn single_character_name_is_a_validation_error() {
    let err: ForgeError = DomainValidator::validate_project_name("x")
        .unwrap_err()
        .into();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(!err.suggestions().is_empty());
}

#[test]
fn plan_directories_cover_every_ancestor() {
    let config = ProjectConfig::builder("demo-api", "/work").build().unwrap();
    let plan = python_plan(&config);

    assert!(plan.validate().is_ok());
    assert_eq!(plan.root(), Path::new("/work/demo-api"));
    let dirs: Vec<PathBuf> = plan.directories().into_iter().collect();
    assert_eq!(dirs, vec![PathBuf::from("."), PathBuf::from("app")]);
}

#[test]
fn docker_toggle_only_touches_docker_group() {
    let on = ProjectConfig::builder("demo-api", ".").build().unwrap();
    let off = ProjectConfig::builder("demo-api", ".")
        .docker(false)
        .build()
        .unwrap();

    let on = python_plan(&on);
    let off = python_plan(&off);
    assert_eq!(on.files_in_group(TemplateGroup::Docker).count(), 1);
    assert_eq!(off.files_in_group(TemplateGroup::Docker).count(), 0);
    assert_eq!(
        on.files_in_group(TemplateGroup::Core).count(),
        off.files_in_group(TemplateGroup::Core).count()
    );
}

#[test]
fn absolute_template_paths_are_refused() {
    assert!(matches!(
        FileTemplate::try_new("/etc/hosts", TemplateGroup::Core, ""),
        Err(DomainError::AbsolutePathNotAllowed { .. })
    ));
    assert!(RelativePath::try_new("src/main.ts").is_ok());
}

#[test]
fn render_context_fills_project_placeholders() {
    let ctx = RenderContext::new("demo-api");
    assert_eq!(
        ctx.render("name = \"{{PROJECT_NAME}}\"\nmodule {{PROJECT_NAME_SNAKE}}"),
        "name = \"demo-api\"\nmodule demo_api"
    );
}
