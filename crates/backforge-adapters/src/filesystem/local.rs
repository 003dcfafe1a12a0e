//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use backforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn has_entries(&self, path: &Path) -> ForgeResult<bool> {
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;
        Ok(entries.next().is_some())
    }

    /// Asks the OS whether this process may create entries in `path`.
    /// Ownership, ACLs and root privileges all count; nothing is created.
    fn is_writable(&self, path: &Path) -> bool {
        #[cfg(unix)]
        {
            use std::ffi::CString;
            use std::os::unix::ffi::OsStrExt;

            let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
                return false;
            };
            // SAFETY: `c_path` is a valid NUL-terminated string for the call.
            unsafe { libc::access(c_path.as_ptr(), libc::W_OK) == 0 }
        }
        #[cfg(not(unix))]
        {
            std::fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
        }
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
