//! Application layer errors.
//!
//! These errors come from orchestration: the validation chain, the
//! filesystem and subprocess ports. Business rule errors are `DomainError`.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Target directory exists and has entries.
    #[error("Destination {path} already exists and is not empty")]
    DestinationOccupied { path: PathBuf },

    /// Target's parent directory does not exist.
    #[error("Parent directory {path} does not exist")]
    ParentMissing { path: PathBuf },

    /// Target's parent directory is read-only for this process.
    #[error("Parent directory {path} is not writable")]
    ParentNotWritable { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// External program could not be started or exited non-zero.
    #[error("`{program}` failed: {reason}")]
    CommandFailed { program: String, reason: String },

    /// External program ran past its deadline and was killed.
    #[error("`{program}` did not finish within {timeout:?}")]
    CommandTimedOut { program: String, timeout: Duration },

    /// Template catalog could not produce a file set.
    #[error("Template catalog error: {reason}")]
    CatalogError { reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationOccupied { path } => vec![
                format!("{} already has files in it", path.display()),
                "Pass --overwrite to generate into it anyway".into(),
                "Or choose a different project name or --output-dir".into(),
            ],
            Self::ParentMissing { path } => vec![
                format!("Create {} first", path.display()),
                "Or point --output-dir at an existing directory".into(),
            ],
            Self::ParentNotWritable { path } => vec![
                format!("Check the permissions on {}", path.display()),
                "Or point --output-dir at a directory you own".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::CommandFailed { program, .. } | Self::CommandTimedOut { program, .. } => vec![
                format!("Make sure `{program}` is installed and on PATH"),
            ],
            Self::CatalogError { .. } | Self::StoreLockError => {
                vec!["This is likely a bug, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationOccupied { .. }
            | Self::ParentMissing { .. }
            | Self::ParentNotWritable { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::CommandTimedOut { .. }
            | Self::CatalogError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
