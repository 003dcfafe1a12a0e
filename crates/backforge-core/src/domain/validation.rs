use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    entities::{GenerationPlan, ProjectConfig},
    error::DomainError,
};

/// Minimum accepted project name length.
pub const MIN_NAME_LEN: usize = 2;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("project name pattern is a valid regex")
});

/// Centralized domain validation.
///
/// All rule logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Project names start alphanumeric, use `[A-Za-z0-9_-]` and are at least
    /// two characters long.
    pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
        if !NAME_PATTERN.is_match(name) {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: "must start with a letter or digit and contain only A-Z, a-z, 0-9, '-' and '_'"
                    .into(),
            });
        }
        if name.chars().count() < MIN_NAME_LEN {
            return Err(DomainError::InvalidProjectName {
                name: name.to_string(),
                reason: format!("must be at least {MIN_NAME_LEN} characters long"),
            });
        }
        Ok(())
    }

    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_plan(plan: &GenerationPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
