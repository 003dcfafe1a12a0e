//! In-crate test doubles for the output ports.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::{
    ApplicationError,
    ports::{Filesystem, GenerationStep, ProgressSink, TemplateCatalog},
};
use crate::domain::{FileTemplate, ProjectConfig, TemplateGroup};
use crate::error::ForgeResult;

/// Map-backed filesystem. Directories in `read_only` refuse writes.
#[derive(Default)]
pub struct FakeFs {
    pub files: Mutex<BTreeMap<PathBuf, String>>,
    pub dirs: Mutex<BTreeSet<PathBuf>>,
    pub read_only: Mutex<BTreeSet<PathBuf>>,
}

impl FakeFs {
    pub fn with_dirs(dirs: &[&str]) -> Self {
        let fs = Self::default();
        for dir in dirs {
            fs.dirs.lock().unwrap().insert(PathBuf::from(dir));
        }
        fs
    }

    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn mark_read_only(&self, dir: &str) {
        self.read_only.lock().unwrap().insert(PathBuf::from(dir));
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(Path::new(path)).cloned()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let read_only = path
            .parent()
            .is_some_and(|parent| self.read_only.lock().unwrap().contains(parent));
        if read_only {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }

    fn has_entries(&self, path: &Path) -> ForgeResult<bool> {
        let in_dir = |p: &PathBuf| p.parent() == Some(path);
        Ok(self.files.lock().unwrap().keys().any(in_dir)
            || self.dirs.lock().unwrap().iter().any(in_dir))
    }

    fn is_writable(&self, path: &Path) -> bool {
        !self.read_only.lock().unwrap().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "not found".into(),
            }
            .into()
        })
    }
}

/// Catalog with a fixed file set; the `tests` group follows the config flag.
pub struct StubCatalog;

impl TemplateCatalog for StubCatalog {
    fn collect(&self, config: &ProjectConfig) -> ForgeResult<Vec<FileTemplate>> {
        let mut templates = vec![
            FileTemplate::new("README.md", TemplateGroup::Config, "# readme"),
            FileTemplate::new(".gitignore", TemplateGroup::Config, "*.pyc\n"),
            FileTemplate::new("app/api/v1/router.py", TemplateGroup::Core, "router"),
            FileTemplate::new(".pre-commit-config.yaml", TemplateGroup::Config, "repos: []\n"),
        ];
        if config.features().tests {
            templates.push(FileTemplate::new(
                "tests/__init__.py",
                TemplateGroup::Tests,
                "",
            ));
        }
        Ok(templates)
    }
}

/// Records every progress call.
#[derive(Default)]
pub struct RecordingProgress {
    pub steps: Mutex<Vec<(GenerationStep, u8)>>,
    pub finished: Mutex<bool>,
}

impl ProgressSink for RecordingProgress {
    fn step(&self, step: GenerationStep, percent: u8) {
        self.steps.lock().unwrap().push((step, percent));
    }

    fn finish(&self) {
        *self.finished.lock().unwrap() = true;
    }
}
