//! Core domain layer for Backforge.
//!
//! Pure data and rules: what a project configuration is, which files a plan
//! contains, and what makes a project name acceptable. No I/O happens here;
//! the application layer reaches the disk and subprocesses through ports.
//!
//! ## Rules
//!
//! - **No I/O**: no filesystem, process or network calls
//! - **Immutable entities**: a `ProjectConfig` never changes once built
//! - **Behavior on the data**: path and directory derivations live on the entities

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    FeatureOptions, FileTemplate, GenerationPlan, ProjectConfig, ProjectConfigBuilder,
    RenderContext, TemplateContent, WriteOptions, common::RelativePath,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    GenerationDepth, HashAlgorithm, LanguageModel, PackageManager, ProjectVariant, TemplateGroup,
};

pub use validation::{DomainValidator, MIN_NAME_LEN};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn variant_parses_aliases() {
        assert_eq!(ProjectVariant::from_str("py").unwrap(), ProjectVariant::Python);
        assert_eq!(
            ProjectVariant::from_str("FastAPI").unwrap(),
            ProjectVariant::Python
        );
        assert_eq!(
            ProjectVariant::from_str("nestjs").unwrap(),
            ProjectVariant::TypeScript
        );
        assert!(ProjectVariant::from_str("rust").is_err());
    }

    #[test]
    fn only_typescript_supports_agent_features() {
        assert!(ProjectVariant::TypeScript.supports_agent_features());
        assert!(!ProjectVariant::Python.supports_agent_features());
    }

    #[test]
    fn model_parses_registry_keys() {
        assert_eq!(
            LanguageModel::from_str("claude-sonnet-4.5").unwrap(),
            LanguageModel::ClaudeSonnet45
        );
        assert_eq!(LanguageModel::Gemini3.model_id(), "gemini-3-ultra");
        assert_eq!(LanguageModel::ClaudeOpus41.provider(), "anthropic");
        assert!(LanguageModel::from_str("gpt-2").is_err());
    }

    #[test]
    fn package_manager_commands() {
        assert_eq!(PackageManager::Npm.ci_install_command(), "npm ci");
        assert_eq!(PackageManager::Yarn.run_prefix(), "yarn");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
    }

    #[test]
    fn depth_aliases() {
        assert_eq!(
            GenerationDepth::from_str("minimal").unwrap(),
            GenerationDepth::Scaffold
        );
        assert!(GenerationDepth::Full.is_full());
    }

    #[test]
    fn invalid_option_names_the_option() {
        let err = HashAlgorithm::from_str("md5").unwrap_err();
        assert_eq!(err.to_string(), "Invalid value 'md5' for hash algorithm");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn incompatible_option_is_compatibility_category() {
        let err = DomainError::IncompatibleOption {
            option: "rag",
            variant: "python".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Compatibility);
        assert!(err.suggestions().iter().any(|s| s.contains("typescript")));
    }
}
