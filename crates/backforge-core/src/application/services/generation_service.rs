//! Generation Service - the five-step pipeline.
//!
//! 1. Collect templates (catalog port, pure)
//! 2. Create directories
//! 3. Write files, skipping existing ones unless overwriting
//! 4. `git init` (best effort)
//! 5. `pre-commit install` (best effort)
//!
//! Steps 1-3 propagate their errors; files already written stay where they
//! are. Steps 4-5 log failures at debug level and never fail the run.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use crate::{
    application::ports::{
        CommandRunner, Filesystem, GenerationStep, ProgressSink, TemplateCatalog,
    },
    domain::{DomainValidator as validator, GenerationPlan, ProjectConfig},
    error::ForgeResult,
};

/// Deadline for each git invocation.
pub const GIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Deadline for `pre-commit install`.
pub const HOOK_TIMEOUT: Duration = Duration::from_secs(30);

/// Hook configuration file that triggers step 5.
pub const HOOK_CONFIG: &str = ".pre-commit-config.yaml";

/// What happened in one of the best-effort steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum StepOutcome {
    Done,
    Skipped(String),
    Failed(String),
}

impl StepOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Summary of a finished generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    /// Relative paths written, in catalog order.
    pub written: Vec<PathBuf>,
    /// Relative paths left untouched because they already existed.
    pub skipped: Vec<PathBuf>,
    pub directories: usize,
    pub git: StepOutcome,
    pub hooks: StepOutcome,
}

/// Runs the generation pipeline against injected ports.
pub struct GenerationService {
    catalog: Arc<dyn TemplateCatalog>,
    filesystem: Arc<dyn Filesystem>,
    runner: Arc<dyn CommandRunner>,
}

impl GenerationService {
    pub fn new(
        catalog: Arc<dyn TemplateCatalog>,
        filesystem: Arc<dyn Filesystem>,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            runner,
        }
    }

    /// Step 1 on its own: collect and validate the plan without touching disk.
    #[instrument(skip_all, fields(project = %config.name(), variant = %config.variant()))]
    pub fn plan(&self, config: &ProjectConfig) -> ForgeResult<GenerationPlan> {
        validator::validate_config(config)?;

        let templates = self.catalog.collect(config)?;
        let plan = GenerationPlan::new(config.target_dir(), templates);
        validator::validate_plan(&plan)?;

        debug!(files = plan.len(), "plan collected");
        Ok(plan)
    }

    /// Run all five steps.
    #[instrument(
        skip_all,
        fields(
            project = %config.name(),
            target = %config.target_dir().display(),
            overwrite = config.overwrite()
        )
    )]
    pub fn generate(
        &self,
        config: &ProjectConfig,
        progress: &dyn ProgressSink,
    ) -> ForgeResult<GenerationReport> {
        info!("Generating {config}");

        // 1. Collect templates
        announce(progress, GenerationStep::CollectTemplates);
        let plan = self.plan(config)?;
        let root = plan.root().to_path_buf();

        // 2. Create directories
        announce(progress, GenerationStep::CreateDirectories);
        let directories = self.create_directories(&plan)?;

        // 3. Write files
        announce(progress, GenerationStep::WriteFiles);
        let (written, skipped) = self.write_files(&plan, config.overwrite())?;
        info!(
            written = written.len(),
            skipped = skipped.len(),
            "files written"
        );

        // 4. Initialize git
        announce(progress, GenerationStep::InitGit);
        let git = if config.write_options().git_init {
            self.init_git(&root)
        } else {
            StepOutcome::skipped("disabled")
        };

        // 5. Install hooks
        announce(progress, GenerationStep::InstallHooks);
        let hooks = if config.write_options().install_hooks {
            self.install_hooks(&root)
        } else {
            StepOutcome::skipped("disabled")
        };

        progress.finish();
        info!("Generation completed");

        Ok(GenerationReport {
            root,
            written,
            skipped,
            directories,
            git,
            hooks,
        })
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    fn create_directories(&self, plan: &GenerationPlan) -> ForgeResult<usize> {
        let dirs = plan.directories();
        for dir in &dirs {
            let path = if dir.as_path() == Path::new(".") {
                plan.root().to_path_buf()
            } else {
                plan.root().join(dir)
            };
            trace!(dir = %path.display(), "create");
            self.filesystem.create_dir_all(&path)?;
        }
        Ok(dirs.len())
    }

    fn write_files(
        &self,
        plan: &GenerationPlan,
        overwrite: bool,
    ) -> ForgeResult<(Vec<PathBuf>, Vec<PathBuf>)> {
        let mut written = Vec::with_capacity(plan.len());
        let mut skipped = Vec::new();

        for template in plan.templates() {
            let relative = template.path.as_path();
            let path = plan.root().join(relative);

            if !overwrite && self.filesystem.exists(&path) {
                debug!(path = %relative.display(), "exists, skipping");
                skipped.push(relative.to_path_buf());
                continue;
            }

            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &template.content())?;
            trace!(path = %relative.display(), "written");
            written.push(relative.to_path_buf());
        }

        Ok((written, skipped))
    }

    fn init_git(&self, root: &Path) -> StepOutcome {
        if self.filesystem.exists(&root.join(".git")) {
            return StepOutcome::skipped("already a git repository");
        }

        if let Err(e) = self.runner.run("git", &["init".to_string()], root, GIT_TIMEOUT) {
            debug!(error = %e, "git init failed, continuing");
            return StepOutcome::Failed(e.to_string());
        }

        if self.filesystem.exists(&root.join(".gitignore")) {
            let args = ["add".to_string(), ".gitignore".to_string()];
            if let Err(e) = self.runner.run("git", &args, root, GIT_TIMEOUT) {
                debug!(error = %e, "git add .gitignore failed, continuing");
                return StepOutcome::Failed(e.to_string());
            }
        }

        StepOutcome::Done
    }

    fn install_hooks(&self, root: &Path) -> StepOutcome {
        if !self.filesystem.exists(&root.join(HOOK_CONFIG)) {
            return StepOutcome::skipped("no hook configuration generated");
        }

        match self
            .runner
            .run("pre-commit", &["install".to_string()], root, HOOK_TIMEOUT)
        {
            Ok(()) => StepOutcome::Done,
            Err(e) => {
                debug!(error = %e, "pre-commit install failed, continuing");
                StepOutcome::Failed(e.to_string())
            }
        }
    }
}

fn announce(progress: &dyn ProgressSink, step: GenerationStep) {
    debug!(step = %step, "starting step");
    progress.step(step, step.percent());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockCommandRunner, NoProgress},
        testing::{FakeFs, RecordingProgress, StubCatalog},
    };
    use crate::domain::TemplateGroup;
    use crate::error::ForgeError;

    fn service(fs: Arc<FakeFs>, runner: MockCommandRunner) -> GenerationService {
        GenerationService::new(Arc::new(StubCatalog), fs, Arc::new(runner))
    }

    fn quiet_config() -> ProjectConfig {
        ProjectConfig::builder("demo", "/out")
            .git_init(false)
            .install_hooks(false)
            .build()
            .unwrap()
    }

    fn expect_call(
        runner: &mut MockCommandRunner,
        program: &'static str,
        first_arg: &'static str,
        timeout: Duration,
        result: fn() -> ForgeResult<()>,
    ) {
        runner
            .expect_run()
            .withf(move |p, args, cwd, t| {
                p == program
                    && args.first().is_some_and(|a| a == first_arg)
                    && cwd == Path::new("/out/demo")
                    && *t == timeout
            })
            .times(1)
            .returning(move |_, _, _, _| result());
    }

    #[test]
    fn full_run_writes_tree_and_bootstraps_repository() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out"]));
        let mut runner = MockCommandRunner::new();
        expect_call(&mut runner, "git", "init", GIT_TIMEOUT, || Ok(()));
        expect_call(&mut runner, "git", "add", GIT_TIMEOUT, || Ok(()));
        expect_call(&mut runner, "pre-commit", "install", HOOK_TIMEOUT, || Ok(()));

        let config = ProjectConfig::builder("demo", "/out").build().unwrap();
        let progress = RecordingProgress::default();
        let report = service(Arc::clone(&fs), runner)
            .generate(&config, &progress)
            .unwrap();

        assert_eq!(report.written.len(), 5);
        assert!(report.skipped.is_empty());
        assert_eq!(report.git, StepOutcome::Done);
        assert_eq!(report.hooks, StepOutcome::Done);
        assert!(fs.is_dir(Path::new("/out/demo/app/api/v1")));
        assert_eq!(fs.file("/out/demo/README.md").as_deref(), Some("# readme"));

        let steps = progress.steps.lock().unwrap();
        let percents: Vec<u8> = steps.iter().map(|(_, p)| *p).collect();
        assert_eq!(percents, vec![0, 20, 40, 60, 80]);
        assert!(*progress.finished.lock().unwrap());
    }

    #[test]
    fn existing_files_survive_without_overwrite() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out", "/out/demo"]));
        fs.add_file("/out/demo/README.md", "custom");

        let report = service(Arc::clone(&fs), MockCommandRunner::new())
            .generate(&quiet_config(), &NoProgress)
            .unwrap();

        assert_eq!(fs.file("/out/demo/README.md").as_deref(), Some("custom"));
        assert_eq!(report.skipped, vec![PathBuf::from("README.md")]);

        // Running again changes nothing either.
        service(Arc::clone(&fs), MockCommandRunner::new())
            .generate(&quiet_config(), &NoProgress)
            .unwrap();
        assert_eq!(fs.file("/out/demo/README.md").as_deref(), Some("custom"));
    }

    #[test]
    fn overwrite_replaces_existing_files() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out", "/out/demo"]));
        fs.add_file("/out/demo/README.md", "custom");

        let config = ProjectConfig::builder("demo", "/out")
            .overwrite(true)
            .git_init(false)
            .install_hooks(false)
            .build()
            .unwrap();
        let report = service(Arc::clone(&fs), MockCommandRunner::new())
            .generate(&config, &NoProgress)
            .unwrap();

        assert_eq!(fs.file("/out/demo/README.md").as_deref(), Some("# readme"));
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn git_and_hook_failures_are_absorbed() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out"]));
        let mut runner = MockCommandRunner::new();
        expect_call(&mut runner, "git", "init", GIT_TIMEOUT, || {
            Err(ApplicationError::CommandFailed {
                program: "git".into(),
                reason: "not found".into(),
            }
            .into())
        });
        expect_call(&mut runner, "pre-commit", "install", HOOK_TIMEOUT, || {
            Err(ApplicationError::CommandTimedOut {
                program: "pre-commit".into(),
                timeout: HOOK_TIMEOUT,
            }
            .into())
        });

        let config = ProjectConfig::builder("demo", "/out").build().unwrap();
        let report = service(fs, runner)
            .generate(&config, &NoProgress)
            .unwrap();

        assert!(matches!(report.git, StepOutcome::Failed(_)));
        assert!(matches!(report.hooks, StepOutcome::Failed(_)));
    }

    #[test]
    fn existing_repository_is_not_reinitialized() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out", "/out/demo", "/out/demo/.git"]));
        let config = ProjectConfig::builder("demo", "/out")
            .overwrite(true)
            .install_hooks(false)
            .build()
            .unwrap();

        let report = service(fs, MockCommandRunner::new())
            .generate(&config, &NoProgress)
            .unwrap();
        assert_eq!(report.git, StepOutcome::skipped("already a git repository"));
    }

    #[test]
    fn write_failure_propagates_and_skips_later_steps() {
        let fs = Arc::new(FakeFs::with_dirs(&["/out"]));
        fs.mark_read_only("/out/demo/app/api/v1");

        let config = ProjectConfig::builder("demo", "/out").build().unwrap();
        let err = service(fs, MockCommandRunner::new())
            .generate(&config, &NoProgress)
            .unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn tests_flag_adds_only_test_group() {
        let svc = service(Arc::new(FakeFs::default()), MockCommandRunner::new());
        let with = svc
            .plan(&ProjectConfig::builder("demo", "/out").build().unwrap())
            .unwrap();
        let without = svc
            .plan(&ProjectConfig::builder("demo", "/out").tests(false).build().unwrap())
            .unwrap();

        assert_eq!(without.files_in_group(TemplateGroup::Tests).count(), 0);
        assert_eq!(with.len() - without.len(), with.files_in_group(TemplateGroup::Tests).count());
    }
}
