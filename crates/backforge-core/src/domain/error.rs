// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error("Duplicate path in template set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Template set is empty")]
    EmptyPlan,

    // ========================================================================
    // Compatibility Errors
    // ========================================================================
    #[error("option '{option}' is not available for {variant} projects")]
    IncompatibleOption {
        option: &'static str,
        variant: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { .. } => vec![
                "Start the name with a letter or a digit".into(),
                "Use only A-Z, a-z, 0-9, '-' and '_'".into(),
                "Use at least 2 characters".into(),
                "Examples: demo-api, billing_service, api2".into(),
            ],
            Self::InvalidOption { option, .. } => vec![
                format!("Check the accepted values for {option}"),
                "Run with --help to list them".into(),
            ],
            Self::IncompatibleOption { option, variant } => vec![
                format!("'{option}' is not generated for {variant} projects"),
                "Use --type typescript for RAG and queue scaffolding".into(),
            ],
            _ => vec!["This is likely a bug in a built-in template set".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidOption { .. } => {
                ErrorCategory::Validation
            }
            Self::IncompatibleOption { .. } => ErrorCategory::Compatibility,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyPlan => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
    Internal,
}
