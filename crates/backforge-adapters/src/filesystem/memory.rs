//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use backforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Cloning shares the same state, so a test can keep one handle while the
/// service under test owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with these directories (and their ancestors) present.
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let fs = Self::new();
        if let Ok(mut inner) = fs.inner.write() {
            for dir in dirs {
                insert_with_ancestors(&mut inner.directories, dir.as_ref());
            }
        }
        fs
    }

    /// Make `dir` refuse new entries.
    pub fn mark_read_only(&self, dir: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(dir.as_ref().to_path_buf());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> ForgeResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    fn write(&self) -> ForgeResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }
}

fn insert_with_ancestors(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        dirs.insert(current.clone());
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;

        let first_missing = path
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .take_while(|p| !inner.directories.contains(*p))
            .last()
            .map(Path::to_path_buf);
        let blocked = first_missing
            .as_deref()
            .and_then(Path::parent)
            .is_some_and(|parent| inner.read_only.contains(parent));
        if blocked {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }

        insert_with_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.write()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
            if inner.read_only.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Permission denied".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn has_entries(&self, path: &Path) -> ForgeResult<bool> {
        let inner = self.read()?;
        let child = |p: &PathBuf| p.parent() == Some(path);
        Ok(inner.files.keys().any(child) || inner.directories.iter().any(child))
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.directories.contains(path) && !inner.read_only.contains(path))
            .unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/demo/app")).unwrap();

        assert!(fs.is_dir(Path::new("/out")));
        assert!(fs.is_dir(Path::new("/out/demo")));
        assert!(fs.has_entries(Path::new("/out/demo")).unwrap());
        assert!(!fs.has_entries(Path::new("/out/demo/app")).unwrap());
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/nope/file.txt"), "x").is_err());
    }

    #[test]
    fn read_only_directory_refuses_writes() {
        let fs = MemoryFilesystem::with_dirs(["/locked"]);
        fs.mark_read_only("/locked");

        assert!(!fs.is_writable(Path::new("/locked")));
        assert!(fs.write_file(Path::new("/locked/a"), "x").is_err());
        assert!(fs.create_dir_all(Path::new("/locked/sub/dir")).is_err());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::with_dirs(["/out"]);
        let handle = fs.clone();
        fs.write_file(Path::new("/out/a.txt"), "hello").unwrap();
        assert_eq!(handle.read_file("/out/a.txt").as_deref(), Some("hello"));
    }
}
