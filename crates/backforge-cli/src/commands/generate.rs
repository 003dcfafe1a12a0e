//! Project generation, the default action of `backforge`.
//!
//! Responsibility: turn arguments, config defaults and interactive answers
//! into a `ProjectConfig`, run the validation chain and the generation
//! pipeline from `backforge-core`, and report the result. No business
//! logic lives here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, instrument};

use backforge_adapters::{BuiltinCatalog, LocalFilesystem, ProcessRunner};
use backforge_core::prelude::*;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::prompt,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute a generation run.
///
/// Dispatch sequence:
/// 1. Resolve every option (flags, then prompts, then config defaults)
/// 2. Run the validation chain; nothing is written before it passes
/// 3. Show the summary and confirm unless `--yes`
/// 4. Early-exit with the plan if `--dry-run`
/// 5. Run the pipeline with a progress bar
/// 6. Print the outcome and next steps
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: GenerateArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let interactive = prompt::available(args.non_interactive);
    debug!(interactive, "resolving options");

    // 1. Resolve
    let project = resolve_project(&args, config, interactive)?;
    info!(project = %project, target = %project.target_dir().display(), "options resolved");

    // 2. Validate
    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    ValidatorChain::for_request(Arc::clone(&fs), project.overwrite())
        .run(project.name(), project.target_dir())?;

    let service = GenerationService::new(
        Arc::new(BuiltinCatalog::new()),
        fs,
        Arc::new(ProcessRunner::new()),
    );

    // 3. Summary + confirmation
    show_summary(&project, output)?;
    if interactive && !args.yes && !args.dry_run {
        output.print("")?;
        if !prompt::confirm("Create the project with this configuration?", true)? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run
    if args.dry_run {
        let plan = service.plan(&project)?;
        return show_plan(&plan, output);
    }

    // 5. Generate
    output.print("")?;
    let progress = output.progress();
    let report = service.generate(&project, &progress)?;

    // 6. Outcome
    output.json(&RunSummary::new(&project, &report))?;
    show_outcome(&project, &report, global, output)?;
    Ok(())
}

// ── Option resolution ─────────────────────────────────────────────────────────

fn resolve_project(
    args: &GenerateArgs,
    config: &AppConfig,
    interactive: bool,
) -> CliResult<ProjectConfig> {
    let defaults = &config.defaults;

    let name = match &args.name {
        Some(name) => name.clone(),
        None if interactive => prompt::project_name()?,
        None => {
            return Err(CliError::InvalidInput {
                message: "a project name is required when prompts are disabled".into(),
            });
        }
    };

    let variant = match args.variant {
        Some(variant) => variant.into(),
        None if interactive => {
            prompt::choose("Project type", &ProjectVariant::ALL, defaults.variant)?
        }
        None => defaults.variant,
    };

    let mut builder = ProjectConfig::builder(name, args.output_dir.clone())
        .variant(variant)
        .docker(defaults.docker && !args.no_docker)
        .tests(defaults.tests && !args.no_tests)
        .cicd(defaults.cicd && !args.no_cicd)
        .depth(args.depth.map_or(defaults.depth, Into::into))
        .overwrite(args.overwrite)
        .git_init(defaults.git_init && !args.no_git)
        .install_hooks(defaults.install_hooks && !args.no_hooks)
        .rag(args.rag)
        .queue(args.queue);

    builder = match variant {
        ProjectVariant::Python => {
            let hash = match args.hash_algo {
                Some(hash) => hash.into(),
                None if interactive => prompt::choose(
                    "Password hashing",
                    &HashAlgorithm::ALL,
                    defaults.hash_algorithm,
                )?,
                None => defaults.hash_algorithm,
            };
            builder.hash_algorithm(hash)
        }
        ProjectVariant::TypeScript => {
            let manager = match args.package_manager {
                Some(manager) => manager.into(),
                None if interactive => prompt::choose(
                    "Package manager",
                    &PackageManager::ALL,
                    defaults.package_manager,
                )?,
                None => defaults.package_manager,
            };
            let model = match args.model {
                Some(model) => model.into(),
                None if interactive => {
                    prompt::choose("Default model", &LanguageModel::ALL, defaults.default_model)?
                }
                None => defaults.default_model,
            };
            let rag = args.rag || (interactive && prompt::confirm("Add the RAG module?", false)?);
            let queue =
                args.queue || (interactive && prompt::confirm("Add the queue module?", false)?);

            builder
                .package_manager(manager)
                .default_model(model)
                .rag(rag)
                .queue(queue)
        }
    };

    builder.build().map_err(|e| CliError::Core(e.into()))
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn yes_no(enabled: bool) -> &'static str {
    if enabled { "yes" } else { "no" }
}

fn show_summary(project: &ProjectConfig, output: &OutputManager) -> CliResult<()> {
    let features = project.features();
    let write = project.write_options();

    output.header("Project configuration")?;
    output.field("Name", project.name())?;
    output.field("Directory", &project.target_dir().display().to_string())?;
    output.field(
        "Type",
        &format!("{} ({})", project.variant(), project.variant().framework()),
    )?;
    output.field("Depth", features.depth.as_str())?;
    output.field("Docker", yes_no(features.docker))?;
    output.field("Tests", yes_no(features.tests))?;
    output.field("CI/CD", yes_no(features.cicd))?;
    match project.variant() {
        ProjectVariant::Python => {
            output.field("Hashing", features.hash_algorithm.as_str())?;
        }
        ProjectVariant::TypeScript => {
            output.field("Package manager", features.package_manager.as_str())?;
            output.field("Default model", features.default_model.as_str())?;
            output.field("RAG", yes_no(features.rag))?;
            output.field("Queue", yes_no(features.queue))?;
        }
    }
    output.field("Git", yes_no(write.git_init))?;
    if write.overwrite {
        output.warning("Existing files will be replaced")?;
    }
    Ok(())
}

/// JSON document printed by `--dry-run --output-format json`.
#[derive(Serialize)]
struct PlanSummary<'a> {
    root: &'a Path,
    files: Vec<PlannedFile>,
    directories: Vec<PathBuf>,
}

#[derive(Serialize)]
struct PlannedFile {
    path: String,
    group: TemplateGroup,
}

fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    let directories: Vec<PathBuf> = plan.directories().into_iter().collect();

    if output.is_json() {
        let files = plan
            .templates()
            .iter()
            .map(|t| PlannedFile {
                path: t.path.to_string(),
                group: t.group,
            })
            .collect();
        return output.json(&PlanSummary {
            root: plan.root(),
            files,
            directories,
        });
    }

    output.print("")?;
    output.info(&format!(
        "Dry run: would create {} files in {} directories under {}",
        plan.len(),
        directories.len(),
        plan.root().display()
    ))?;
    for (group, count) in plan.group_counts() {
        output.field(group.as_str(), &count.to_string())?;
    }
    output.print("")?;
    for dir in &directories {
        output.print(&format!("  {}/", dir.display()))?;
    }
    for template in plan.templates() {
        output.print(&format!("  {}", template.path))?;
    }
    Ok(())
}

/// JSON document printed after a successful run with `--output-format json`.
#[derive(Serialize)]
struct RunSummary<'a> {
    name: &'a str,
    variant: ProjectVariant,
    generated_at: String,
    #[serde(flatten)]
    report: &'a GenerationReport,
}

impl<'a> RunSummary<'a> {
    fn new(project: &'a ProjectConfig, report: &'a GenerationReport) -> Self {
        Self {
            name: project.name(),
            variant: project.variant(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            report,
        }
    }
}

fn show_outcome(
    project: &ProjectConfig,
    report: &GenerationReport,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    output.success(&format!(
        "Project '{}' created at {}",
        project.name(),
        report.root.display()
    ))?;
    output.info(&format!(
        "{} files written, {} kept, {} directories",
        report.written.len(),
        report.skipped.len(),
        report.directories
    ))?;
    if global.verbose > 0 {
        for path in &report.skipped {
            output.print(&format!("  kept {}", path.display()))?;
        }
    }

    for (what, outcome) in [("git init", &report.git), ("pre-commit install", &report.hooks)] {
        if let StepOutcome::Failed(reason) = outcome {
            output.warning(&format!("{what} did not complete: {reason}"))?;
        }
    }

    output.print("")?;
    output.header("Next steps")?;
    for (i, step) in next_steps(project).iter().enumerate() {
        output.print(&format!("  {}. {step}", i + 1))?;
    }
    Ok(())
}

fn next_steps(project: &ProjectConfig) -> Vec<String> {
    let features = project.features();
    let mut steps = vec![format!("cd {}", project.target_dir().display())];

    match project.variant() {
        ProjectVariant::Python => {
            steps.push("python -m venv .venv && source .venv/bin/activate".into());
            steps.push("pip install -e \".[dev]\"".into());
            steps.push("cp .env.example .env".into());
            if features.docker {
                steps.push("docker compose up -d db redis".into());
            }
            steps.push("alembic upgrade head".into());
            steps.push("uvicorn app.main:app --reload".into());
        }
        ProjectVariant::TypeScript => {
            let manager = features.package_manager;
            steps.push(manager.install_command().to_string());
            steps.push("cp .env.example .env".into());
            if features.docker {
                steps.push("docker compose up -d db redis".into());
            }
            steps.push(format!("{} db:push", manager.run_prefix()));
            steps.push(format!("{} start:dev", manager.run_prefix()));
        }
    }
    steps
}

// ── tests ─────────────────────────────────────────────────────────────────────
