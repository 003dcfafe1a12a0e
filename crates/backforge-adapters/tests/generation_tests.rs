//! End-to-end pipeline runs against the real adapters.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use backforge_adapters::{BuiltinCatalog, LocalFilesystem, MemoryFilesystem, RecordingRunner};
use backforge_core::application::ApplicationError;
use backforge_core::application::services::{GIT_TIMEOUT, HOOK_TIMEOUT};
use backforge_core::prelude::*;
use walkdir::WalkDir;

fn service(fs: Arc<dyn Filesystem>, runner: &RecordingRunner) -> GenerationService {
    GenerationService::new(Arc::new(BuiltinCatalog::new()), fs, Arc::new(runner.clone()))
}

// =============================================================================
// In-memory runs
// =============================================================================

#[test]
fn demo_api_python_project_end_to_end() {
    let fs = MemoryFilesystem::with_dirs(["/work"]);
    let runner = RecordingRunner::new();
    let config = ProjectConfig::builder("demo-api", "/work").build().unwrap();

    ValidatorChain::for_request(Arc::new(fs.clone()), config.overwrite())
        .run(config.name(), config.target_dir())
        .unwrap();
    let report = service(Arc::new(fs.clone()), &runner)
        .generate(&config, &NoProgress)
        .unwrap();

    assert_eq!(report.root, PathBuf::from("/work/demo-api"));
    for path in [
        "app/main.py",
        "Dockerfile",
        "docker-compose.yml",
        "tests/__init__.py",
        ".pre-commit-config.yaml",
    ] {
        assert!(
            fs.read_file(Path::new("/work/demo-api").join(path)).is_some(),
            "{path} not written"
        );
    }
    assert!(
        fs.read_file("/work/demo-api/app/core/config.py")
            .unwrap()
            .contains("\"demo-api\"")
    );

    assert_eq!(
        runner.command_lines(),
        vec!["git init", "git add .gitignore", "pre-commit install"]
    );
    let calls = runner.calls();
    assert!(calls.iter().all(|c| c.cwd == Path::new("/work/demo-api")));
    assert_eq!(calls[0].timeout, GIT_TIMEOUT);
    assert_eq!(calls[2].timeout, HOOK_TIMEOUT);
    assert_eq!(report.git, StepOutcome::Done);
    assert_eq!(report.hooks, StepOutcome::Done);
}

#[test]
fn typescript_project_skips_hooks_without_config() {
    let fs = MemoryFilesystem::with_dirs(["/work"]);
    let runner = RecordingRunner::new();
    let config = ProjectConfig::builder("agents-api", "/work")
        .variant(ProjectVariant::TypeScript)
        .rag(true)
        .build()
        .unwrap();

    let report = service(Arc::new(fs.clone()), &runner)
        .generate(&config, &NoProgress)
        .unwrap();

    assert!(fs.read_file("/work/agents-api/package.json").is_some());
    assert!(fs.read_file("/work/agents-api/src/agents/rag/.gitkeep").is_some());
    assert!(
        fs.list_dirs()
            .contains(&PathBuf::from("/work/agents-api/src/common/guards"))
    );
    assert_eq!(runner.command_lines(), vec!["git init", "git add .gitignore"]);
    assert!(matches!(report.hooks, StepOutcome::Skipped(_)));
}

#[test]
fn missing_git_does_not_fail_generation() {
    let fs = MemoryFilesystem::with_dirs(["/work"]);
    let runner = RecordingRunner::new()
        .fail_program("git")
        .fail_program("pre-commit");
    let config = ProjectConfig::builder("demo-api", "/work").build().unwrap();

    let report = service(Arc::new(fs.clone()), &runner)
        .generate(&config, &NoProgress)
        .unwrap();

    assert!(matches!(report.git, StepOutcome::Failed(_)));
    assert!(matches!(report.hooks, StepOutcome::Failed(_)));
    assert!(fs.read_file("/work/demo-api/app/main.py").is_some());
}

#[test]
fn occupied_destination_is_rejected_unless_overwriting() {
    let fs = MemoryFilesystem::with_dirs(["/work/demo-api"]);
    fs.write_file(Path::new("/work/demo-api/notes.txt"), "keep me")
        .unwrap();
    let target = Path::new("/work/demo-api");

    let err = ValidatorChain::standard(Arc::new(fs.clone()))
        .run("demo-api", target)
        .unwrap_err();
    assert!(matches!(
        err,
        ForgeError::Application(ApplicationError::DestinationOccupied { .. })
    ));

    ValidatorChain::for_overwrite(Arc::new(fs.clone()))
        .run("demo-api", target)
        .unwrap();
}

#[test]
fn rerun_without_overwrite_keeps_edited_files() {
    let fs = MemoryFilesystem::with_dirs(["/work"]);
    let config = ProjectConfig::builder("demo-api", "/work")
        .git_init(false)
        .install_hooks(false)
        .build()
        .unwrap();
    let first = service(Arc::new(fs.clone()), &RecordingRunner::new())
        .generate(&config, &NoProgress)
        .unwrap();

    fs.write_file(Path::new("/work/demo-api/README.md"), "edited")
        .unwrap();
    let second = service(Arc::new(fs.clone()), &RecordingRunner::new())
        .generate(&config, &NoProgress)
        .unwrap();

    assert_eq!(fs.read_file("/work/demo-api/README.md").as_deref(), Some("edited"));
    assert!(second.written.is_empty());
    assert_eq!(second.skipped.len(), first.written.len());
}

#[test]
fn read_only_parent_fails_validation() {
    let fs = MemoryFilesystem::with_dirs(["/locked"]);
    fs.mark_read_only("/locked");

    let err = ValidatorChain::standard(Arc::new(fs))
        .run("demo-api", Path::new("/locked/demo-api"))
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
}

// =============================================================================
// Real disk
// =============================================================================

#[test]
fn local_filesystem_tree_matches_plan() {
    let tmp = tempfile::tempdir().unwrap();
    let fs: Arc<dyn Filesystem> = Arc::new(LocalFilesystem::new());
    let config = ProjectConfig::builder("demo-api", tmp.path())
        .git_init(false)
        .install_hooks(false)
        .build()
        .unwrap();

    ValidatorChain::standard(Arc::clone(&fs))
        .run(config.name(), config.target_dir())
        .unwrap();
    let pipeline = service(Arc::clone(&fs), &RecordingRunner::new());
    let plan = pipeline.plan(&config).unwrap();
    let report = pipeline.generate(&config, &NoProgress).unwrap();

    let root = tmp.path().join("demo-api");
    let on_disk: BTreeSet<PathBuf> = WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(&root).unwrap().to_path_buf())
        .collect();
    let planned: BTreeSet<PathBuf> = plan
        .templates()
        .iter()
        .map(|t| t.path.as_path().to_path_buf())
        .collect();

    assert_eq!(on_disk, planned);
    assert_eq!(report.written.len(), planned.len());

    let keep = std::fs::read_to_string(root.join("alembic/versions/.gitkeep")).unwrap();
    assert!(keep.is_empty());
    let pyproject = std::fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"demo-api\""));
}

#[cfg(unix)]
#[test]
fn writable_parent_check_agrees_with_the_os() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    let parent = tmp.path().join("locked");
    std::fs::create_dir(&parent).unwrap();
    std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o555)).unwrap();

    let result = ValidatorChain::standard(Arc::new(LocalFilesystem::new()))
        .run("demo-api", &parent.join("demo-api"));
    // Root may write through mode bits; everyone else may not.
    let really = std::fs::create_dir(parent.join("scratch")).is_ok();

    std::fs::set_permissions(&parent, std::fs::Permissions::from_mode(0o755)).unwrap();
    if really {
        assert!(result.is_ok(), "{result:?}");
    } else {
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::ParentNotWritable { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
